fn main() -> anyhow::Result<()> {
    depgraph_lib::main()
}
