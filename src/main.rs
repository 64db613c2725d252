use tenure::commands::Cli;
use tenure::libs::messages::macros::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu()
}
