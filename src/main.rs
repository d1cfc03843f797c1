fn main() -> anyhow::Result<()> {
    gravity_sim::start()
}
