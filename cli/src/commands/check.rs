use crate::terminal::print;
use drillr_common::config::Config;
use drillr_common::network::subnet::Subnet;

/// Ad-hoc derivation for a single prefix, no store involved.
pub fn check(cfg: &Config, subnet: &Subnet) -> anyhow::Result<()> {
    print::header("subnet check", cfg.quiet);
    print::question(&subnet.to_string());
    print::aligned_line("Network address", subnet.network_address);
    print::aligned_line("Broadcast address", subnet.broadcast_address);
    print::aligned_line("Subnet mask", subnet.netmask);
    print::aligned_line("Prefix length", format!("/{}", subnet.prefix_len));
    Ok(())
}
