//! `sst` - short alias binary for sitestack

fn main() -> anyhow::Result<()> {
    sitestack::run()
}
