fn main() -> anyhow::Result<()> {
    animate::main()
}
