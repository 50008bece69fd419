use async_trait::async_trait;
use dnsmasq_manager_application::ports::StaticHostRepository;
use dnsmasq_manager_domain::{
    host_codec, DomainError, HostFieldError, MacAddress, StaticDhcpHost, HOST_PREFIX,
};
use std::io::{self, Write};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, error, info, instrument};

/// dnsmasq `dhcp-host=` file used as the only copy of the reservations.
///
/// Every call reads the whole file. Mutations compute the complete new content
/// first and replace the file in one step; nothing is cached between calls.
pub struct FileStaticHostRepository {
    path: PathBuf,
}

impl FileStaticHostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn map_io_error(&self, e: io::Error) -> DomainError {
        let path = self.display_path();
        match e.kind() {
            io::ErrorKind::NotFound => DomainError::StoreNotFound(path),
            io::ErrorKind::PermissionDenied => DomainError::PermissionDenied(path),
            _ => DomainError::IoError(format!("{}: {}", path, e)),
        }
    }

    async fn load(&self) -> Result<Vec<StaticDhcpHost>, DomainError> {
        let content = fs::read(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read static hosts file");
            self.map_io_error(e)
        })?;

        self.parse(&content)
    }

    /// Foreign lines are skipped as raw bytes, so only `dhcp-host=` lines
    /// have to be valid UTF-8.
    fn parse(&self, content: &[u8]) -> Result<Vec<StaticDhcpHost>, DomainError> {
        let mut hosts = Vec::new();

        for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            if !raw.starts_with(HOST_PREFIX.as_bytes()) {
                debug!(line = %String::from_utf8_lossy(raw), "Skipping line");
                continue;
            }

            let decoded = match std::str::from_utf8(raw) {
                Ok(line) => host_codec::decode(line),
                Err(_) => Err(HostFieldError::MalformedLine(
                    String::from_utf8_lossy(raw).into_owned(),
                )
                .into()),
            };

            match decoded {
                Ok(host) => hosts.push(host),
                Err(errors) => {
                    error!(
                        path = %self.path.display(),
                        line_number = idx + 1,
                        line = %String::from_utf8_lossy(raw),
                        error = %errors,
                        "Failed to parse static DHCP host entry"
                    );
                    return Err(DomainError::CorruptStore {
                        path: self.display_path(),
                        line: idx + 1,
                        errors,
                    });
                }
            }
        }

        Ok(hosts)
    }

    /// Serializes `hosts` as newline-joined lines with no trailing newline.
    fn render(hosts: &[StaticDhcpHost]) -> Result<String, DomainError> {
        let lines = hosts
            .iter()
            .map(host_codec::encode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Replaces the file content on a blocking thread, so a dropped caller
    /// cannot abandon the write halfway.
    async fn store(&self, content: String) -> Result<(), DomainError> {
        let path = self.path.clone();
        let written = tokio::task::spawn_blocking(move || replace_file(&path, content.as_bytes()))
            .await
            .map_err(|e| {
                error!(path = %self.path.display(), error = %e, "Static hosts write task failed");
                DomainError::IoError(format!("{}: {}", self.display_path(), e))
            })?;

        written.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to write static hosts file");
            self.map_io_error(e)
        })
    }

    async fn remove_first<F>(&self, matches: F) -> Result<Option<StaticDhcpHost>, DomainError>
    where
        F: Fn(&StaticDhcpHost) -> bool + Send,
    {
        let mut hosts = self.load().await?;

        let Some(idx) = hosts.iter().position(|h| matches(h)) else {
            return Ok(None);
        };

        let removed = hosts.remove(idx);
        let content = Self::render(&hosts)?;
        self.store(content).await?;

        info!(
            path = %self.path.display(),
            mac = ?removed.mac_address,
            ip = ?removed.ip_address,
            "Removed static host from file"
        );

        Ok(Some(removed))
    }
}

/// Writes `content` to a sibling temp file and renames it over `path`.
///
/// The store must already exist and be writable; a missing store is reported,
/// never recreated. Readers see either the old or the new content.
fn replace_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = std::fs::canonicalize(path)?;
    let permissions = std::fs::OpenOptions::new()
        .write(true)
        .open(&target)?
        .metadata()?
        .permissions();

    let dir = target.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "static hosts file has no parent directory")
    })?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;

    Ok(())
}

#[async_trait]
impl StaticHostRepository for FileStaticHostRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn find_all(&self) -> Result<Vec<StaticDhcpHost>, DomainError> {
        self.load().await
    }

    async fn find(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError> {
        Ok(self.load().await?.into_iter().find(|h| h == host))
    }

    async fn find_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        Ok(self.load().await?.into_iter().find(|h| h.has_mac(mac)))
    }

    async fn find_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        Ok(self.load().await?.into_iter().find(|h| h.has_ip(ip)))
    }

    #[instrument(skip(self, host), fields(path = %self.path.display()))]
    async fn save(&self, host: &StaticDhcpHost) -> Result<(), DomainError> {
        let mut hosts = self.load().await?;
        hosts.push(host.clone());

        let content = Self::render(&hosts)?;
        self.store(content).await?;

        info!(
            mac = ?host.mac_address,
            ip = ?host.ip_address,
            host_name = %host.host_name,
            "Appended static host to file"
        );

        Ok(())
    }

    async fn delete(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h == host).await
    }

    async fn delete_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h.has_mac(mac)).await
    }

    async fn delete_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h.has_ip(ip)).await
    }
}
