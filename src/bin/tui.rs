use anyhow::Result;

fn main() -> Result<()> {
    feito::tui::run()
}
