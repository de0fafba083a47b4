fn main() -> anyhow::Result<()> {
    nocturne::cli::run_cli()
}
