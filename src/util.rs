use crate::error::Error;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

const BINARY_SNIFF_BYTES: usize = 8_000;

/// Content-based binary sniff: a NUL byte in the leading bytes means binary.
/// Unreadable files are reported as binary so callers skip them.
pub fn is_binary_file(path: &Path) -> bool {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return true,
    };
    let mut buf = [0u8; BINARY_SNIFF_BYTES];
    let mut total = 0usize;
    loop {
        match file.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(_) => return true,
        }
        if total == buf.len() {
            break;
        }
    }
    buf[..total].contains(&0)
}

/// Read a file as UTF-8 text with typed errors for the common failures.
pub fn read_text(path: &Path) -> Result<String, Error> {
    let data = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    String::from_utf8(data).map_err(|_| Error::NotUtf8(path.to_path_buf()))
}

/// Relative path as a `/`-separated string, regardless of platform.
pub fn to_posix(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}
