//! dayzmerge command-line entry point

fn main() -> anyhow::Result<()> {
    dayzmerge::cli::run_cli()
}
