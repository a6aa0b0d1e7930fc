fn main() -> anyhow::Result<()> {
  ryonkt_lib::run()
}
