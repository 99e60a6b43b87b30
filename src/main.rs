use color_eyre::Result;

fn main() -> Result<()> {
    kvscope::run_cli()
}
