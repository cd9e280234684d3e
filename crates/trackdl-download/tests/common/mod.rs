//! Shared fixtures for pipeline integration tests.

#![allow(dead_code)]

use std::io;

use axum::Router;
use axum::body::Body;
use axum::routing::get;
use bytes::Bytes;
use futures_util::StreamExt;

/// JPEG signature followed by filler.
pub const JPEG_COVER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];

/// PNG signature followed by filler.
pub const PNG_COVER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];

fn push_atom(out: &mut Vec<u8>, name: &[u8; 4], content: &[u8]) {
    let size = u32::try_from(content.len() + 8).expect("atom too large");
    out.extend_from_slice(&size.to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(content);
}

/// Build a minimal M4A file: `ftyp`, a `moov` holding only `mvhd`, and an
/// `mdat` with `payload` as the "audio" bytes.
pub fn minimal_m4a(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();

    let mut ftyp = Vec::new();
    ftyp.extend_from_slice(b"M4A ");
    ftyp.extend_from_slice(&0u32.to_be_bytes());
    ftyp.extend_from_slice(b"M4A mp42isom");
    push_atom(&mut out, b"ftyp", &ftyp);

    // mvhd version 0: 100 bytes of content
    let mut mvhd = vec![0u8; 100];
    mvhd[12..16].copy_from_slice(&1000u32.to_be_bytes()); // timescale
    mvhd[20..24].copy_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    mvhd[24..26].copy_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
    let matrix: [u32; 9] = [0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000];
    for (i, value) in matrix.iter().enumerate() {
        let at = 36 + i * 4;
        mvhd[at..at + 4].copy_from_slice(&value.to_be_bytes());
    }
    mvhd[96..100].copy_from_slice(&1u32.to_be_bytes()); // next track id

    let mut moov = Vec::new();
    push_atom(&mut moov, b"mvhd", &mvhd);
    push_atom(&mut out, b"moov", &moov);

    push_atom(&mut out, b"mdat", payload);
    out
}

/// Recognisable "audio" bytes.
pub fn audio_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 241) as u8).collect()
}

/// Whether `haystack` contains `needle` as a contiguous run.
pub fn contains_slice(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Local HTTP server serving the pipeline's fixtures.
///
/// Routes:
/// - `/a.m4a` - the M4A fixture with `content-length`
/// - `/chunked.m4a` - the same bytes streamed without `content-length`
/// - `/empty.m4a` - a zero-byte body
/// - `/stall.m4a` - 1 KiB, then never finishes
/// - `/cover.jpg`, `/cover.png` - cover images
/// - `/stall-cover.jpg` - a cover response that never finishes
/// - anything else - 404
pub struct FixtureServer {
    base_url: String,
    audio: Bytes,
}

impl FixtureServer {
    pub async fn start(audio: Vec<u8>) -> Self {
        let audio = Bytes::from(audio);

        let router = Router::new()
            .route(
                "/a.m4a",
                get({
                    let audio = audio.clone();
                    move || {
                        let audio = audio.clone();
                        async move { audio }
                    }
                }),
            )
            .route(
                "/chunked.m4a",
                get({
                    let audio = audio.clone();
                    move || {
                        let audio = audio.clone();
                        async move {
                            let chunks: Vec<Result<Bytes, io::Error>> = audio
                                .chunks(3000)
                                .map(|c| Ok(Bytes::copy_from_slice(c)))
                                .collect();
                            Body::from_stream(futures_util::stream::iter(chunks))
                        }
                    }
                }),
            )
            .route("/empty.m4a", get(|| async { Bytes::new() }))
            .route(
                "/stall.m4a",
                get(|| async {
                    let head = futures_util::stream::once(async {
                        Ok::<_, io::Error>(Bytes::from_static(&[0u8; 1024]))
                    });
                    Body::from_stream(head.chain(futures_util::stream::pending()))
                }),
            )
            .route(
                "/stall-cover.jpg",
                get(|| async {
                    Body::from_stream(futures_util::stream::pending::<Result<Bytes, io::Error>>())
                }),
            )
            .route("/cover.jpg", get(|| async { Bytes::from_static(JPEG_COVER) }))
            .route("/cover.png", get(|| async { Bytes::from_static(PNG_COVER) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("serve fixture server");
        });

        Self {
            base_url: format!("http://{addr}"),
            audio,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn audio(&self) -> &[u8] {
        &self.audio
    }
}
