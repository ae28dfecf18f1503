use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read until end-of-stream and return exactly the bytes seen, in order
pub async fn read_input<R>(mut reader: R) -> std::io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_all_lines_verbatim() {
        let input: &[u8] = b"line one\nline two\r\n\nno trailing newline";
        let buf = read_input(input).await.unwrap();
        assert_eq!(&buf[..], input);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let buf = read_input(&b""[..]).await.unwrap();
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn test_reads_past_chunk_boundaries() {
        let (mut tx, rx) = tokio::io::duplex(16);
        let payload: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();

        let writer = tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;
            for chunk in payload.chunks(7) {
                tx.write_all(chunk).await.unwrap();
            }
        });

        let buf = read_input(rx).await.unwrap();
        writer.await.unwrap();
        assert_eq!(&buf[..], &expected[..]);
    }
}
