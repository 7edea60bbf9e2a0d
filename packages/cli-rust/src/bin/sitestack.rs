//! `sitestack` binary entry point

fn main() -> anyhow::Result<()> {
    sitestack::run()
}
