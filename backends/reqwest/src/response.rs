use std::{
    future::poll_fn,
    io,
    pin::Pin,
    task::{ready, Context, Poll},
};

use bytes::Bytes;
use http::response::Parts;
use http_body::Body as _;

#[derive(Debug)]
pub(crate) struct ReqwestResponse {
    parts: Parts,
    body: Pin<Box<reqwest::Body>>,
    buffer: Bytes,
}

impl ReqwestResponse {
    pub fn new(response: reqwest::Response) -> Self {
        let http_response: http::Response<reqwest::Body> = response.into();
        let (parts, body) = http_response.into_parts();

        Self {
            parts,
            body: Box::pin(body),
            buffer: Bytes::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.parts.status.as_u16()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.body.size_hint().exact()
    }

    pub fn get_header(&self, header: &str) -> Vec<String> {
        self.parts
            .headers
            .get_all(header)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect()
    }

    /// Collects the rest of the body, including anything already buffered by `read`.
    pub async fn collect_all_bytes(&mut self) -> Result<Vec<u8>, reqwest::Error> {
        let mut bufs = vec![std::mem::take(&mut self.buffer)];
        while let Some(frame) = self.receive_data_frame().await? {
            bufs.push(frame);
        }
        Ok(bufs.concat())
    }

    pub fn write_to(&mut self, buf: &mut [u8]) -> usize {
        let to_write = buf.len().min(self.buffer.len());
        if to_write > 0 {
            let src = self.buffer.split_to(to_write);
            buf[..to_write].copy_from_slice(&src);
        }
        to_write
    }

    fn poll_receive_data_frame(
        &mut self,
        cx: &mut Context<'_>,
    ) -> Poll<Result<Option<Bytes>, reqwest::Error>> {
        loop {
            let frame = ready!(self.body.as_mut().poll_frame(cx));
            match frame {
                None => return Poll::Ready(Ok(None)),
                Some(Err(e)) => return Poll::Ready(Err(e)),
                // Trailers and empty data frames carry nothing for the caller.
                Some(Ok(f)) => match f.into_data() {
                    Ok(data) if !data.is_empty() => return Poll::Ready(Ok(Some(data))),
                    _ => continue,
                },
            }
        }
    }

    async fn receive_data_frame(&mut self) -> Result<Option<Bytes>, reqwest::Error> {
        poll_fn(|cx| self.poll_receive_data_frame(cx)).await
    }

    pub async fn receive_data_frame_buffered(&mut self) -> io::Result<usize> {
        let buffer = self
            .receive_data_frame()
            .await
            .map_err(io::Error::other)?
            .unwrap_or_default();
        let len = buffer.len();
        self.buffer = buffer;
        Ok(len)
    }
}
