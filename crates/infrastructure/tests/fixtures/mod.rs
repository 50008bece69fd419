#![allow(dead_code)]

use dnsmasq_manager_domain::{MacAddress, StaticDhcpHost};
use std::io::Write;
use std::net::Ipv4Addr;
use std::path::Path;
use tempfile::NamedTempFile;

pub const ALL_HOSTS_FILE_CONTENT: &str = "dhcp-host=02:04:06:dd:ee:ff,1.1.1.2,Bar
dhcp-host=02:04:06:aa:bb:cc,1.1.1.1,Foo
dhcp-host=02:04:06:12:34:56,1.1.1.3,Baz";

pub const DELETED_FOO_FILE_CONTENT: &str = "dhcp-host=02:04:06:dd:ee:ff,1.1.1.2,Bar
dhcp-host=02:04:06:12:34:56,1.1.1.3,Baz";

pub const ADDED_UNKNOWN_FILE_CONTENT: &str = "dhcp-host=02:04:06:dd:ee:ff,1.1.1.2,Bar
dhcp-host=02:04:06:aa:bb:cc,1.1.1.1,Foo
dhcp-host=02:04:06:12:34:56,1.1.1.3,Baz
dhcp-host=02:04:06:aa:bb:ff,9.9.9.9,Unknown";

pub const FOO_FILE_CONTENT: &str = "dhcp-host=02:04:06:aa:bb:cc,1.1.1.1,Foo";

pub const INVALID_HOSTS_FILE_CONTENT: &str = "dhcp-host=ab:cd:ef:gh:ij:kl,1.1.1.1,Jung";

pub const INVALID_BOTH_ADDRESSES_FILE_CONTENT: &str = "dhcp-host=ab:cd:ef:gh:ij:kl,11.1.1,Jung";

pub const FOREIGN_ONLY_FILE_CONTENT: &str = "# dnsmasq static leases
dhcp-range=192.168.1.50,192.168.1.150,12h
domain=lan";

pub fn mac(s: &str) -> MacAddress {
    s.parse().unwrap()
}

pub fn foo() -> StaticDhcpHost {
    StaticDhcpHost::new(mac("02:04:06:aa:bb:cc"), Ipv4Addr::new(1, 1, 1, 1), "Foo")
}

pub fn bar() -> StaticDhcpHost {
    StaticDhcpHost::new(mac("02:04:06:dd:ee:ff"), Ipv4Addr::new(1, 1, 1, 2), "Bar")
}

pub fn baz() -> StaticDhcpHost {
    StaticDhcpHost::new(mac("02:04:06:12:34:56"), Ipv4Addr::new(1, 1, 1, 3), "Baz")
}

pub fn unknown() -> StaticDhcpHost {
    StaticDhcpHost::new(mac("02:04:06:aa:bb:ff"), Ipv4Addr::new(9, 9, 9, 9), "Unknown")
}

pub fn static_hosts_file(content: &str) -> NamedTempFile {
    static_hosts_file_bytes(content.as_bytes())
}

pub fn static_hosts_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// `count` distinct well-formed entries, large enough that a rewrite takes
/// several scheduler ticks.
pub fn many_hosts_file_content(count: u16) -> String {
    (0..count)
        .map(|i| {
            let (hi, lo) = (i / 256, i % 256);
            format!(
                "dhcp-host=02:04:{:02x}:{:02x}:00:01,10.0.{}.{},host-{}",
                hi, lo, hi, lo, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Makes `path` read-only. Returns false when the process can still open it
/// for writing (e.g. running as root), in which case the caller should skip.
pub fn make_read_only(path: &Path) -> bool {
    let mut permissions = std::fs::metadata(path).unwrap().permissions();
    permissions.set_readonly(true);
    std::fs::set_permissions(path, permissions).unwrap();

    std::fs::OpenOptions::new().write(true).open(path).is_err()
}
