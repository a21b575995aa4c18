use anyhow::Result;

fn main() -> Result<()> {
    sensible_env_logger::init!();

    let cli = michelin_explorer::interpret();
    michelin_explorer::run(cli)
}
