use miette::Result;

/// Main entry point for the sb-graphviz CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    sb_graphviz::run()
}
