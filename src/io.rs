use std::{io::Result, path::Path};

use tokio::{
    fs::{create_dir_all, File},
    io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader},
};

/// Create `dir` and its parents. Existing directories are fine.
pub async fn ensure_dir<P>(dir: P) -> Result<()>
where
    P: AsRef<Path>,
{
    create_dir_all(dir).await
}

async fn create_parent_dirs_for(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent).await,
        _ => Ok(()),
    }
}

pub async fn create_file<P>(name: P) -> Result<File>
where
    P: AsRef<Path>,
{
    create_parent_dirs_for(name.as_ref()).await?;
    File::create(name).await
}

/// Write `bytes` in pieces of at most `chunk_size`, returning the count written.
pub async fn write_chunked<W>(writer: &mut W, bytes: &[u8], chunk_size: usize) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    for chunk in bytes.chunks(chunk_size.max(1)) {
        if chunk.is_empty() {
            continue;
        }
        writer.write_all(chunk).await?;
        written += chunk.len();
    }
    Ok(written)
}

/// Print `prompt` and read one trimmed line from stdin.
pub async fn prompt_line(prompt: &str) -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(line.trim().to_owned())
}
