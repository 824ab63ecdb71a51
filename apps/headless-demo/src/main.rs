fn main() -> anyhow::Result<()> {
    headless_demo::entry_point()
}
