fn main() -> anyhow::Result<()> {
    benchplot::run()
}
