use crate::config::CaptureConfig;
use crate::frame::{FrameGeometry, VideoFrameType};
use crate::generator::VideoFrameGenerator;
use bytes::{Buf, Bytes, BytesMut};
use confer_core::{ConferenceError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, info, warn};

enum Source<R> {
    Ready(R),
    Unavailable(String),
}

/// Replays raw I420 frames from a seekable byte store, rewinding to the start
/// whenever fewer than one frame's worth of bytes remain.
///
/// Construction never fails. If the store cannot be opened, every call to
/// [`generate_next_frame`](VideoFrameGenerator::generate_next_frame) returns
/// `ResourceUnavailable`. If the store is shorter than one frame even from
/// the start, the call returns `IncompleteFrame`. A partially filled frame is
/// never returned.
pub struct FileFrameGenerator<R = File> {
    geometry: FrameGeometry,
    fps: u32,
    frame_type: VideoFrameType,
    name: String,
    source: Source<R>,
    store_len: Option<u64>,
    scratch: BytesMut,
}

impl FileFrameGenerator<File> {
    pub fn open(path: impl AsRef<Path>, width: u32, height: u32, fps: u32) -> Self {
        let path = path.as_ref();
        let name = path.display().to_string();

        match File::open(path) {
            Ok(file) => {
                let store_len = file.metadata().ok().map(|m| m.len());
                info!("Opened frame source {} ({:?} bytes)", name, store_len);
                Self::build(name, Source::Ready(file), store_len, width, height, fps)
            }
            Err(e) => {
                warn!("Failed to open frame source {}: {}", name, e);
                Self::build(
                    name,
                    Source::Unavailable(e.to_string()),
                    None,
                    width,
                    height,
                    fps,
                )
            }
        }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::open(&config.source_path, config.width, config.height, config.fps)
    }
}

impl<R: Read + Seek> FileFrameGenerator<R> {
    /// Wrap an already open store, e.g. an in-memory `Cursor`. `name` is only
    /// used in logs and errors.
    pub fn from_reader(
        mut reader: R,
        name: impl Into<String>,
        width: u32,
        height: u32,
        fps: u32,
    ) -> Self {
        let store_len = store_len(&mut reader).ok();
        Self::build(name.into(), Source::Ready(reader), store_len, width, height, fps)
    }

    /// Replace the contents of `out` with the next frame, reusing its
    /// allocation. On error `out` is left as it was.
    pub fn next_frame_into(&mut self, out: &mut BytesMut) -> Result<()> {
        let frame_size = self.geometry.frame_size();
        let name = self.name.as_str();

        let reader = match &mut self.source {
            Source::Ready(reader) => reader,
            Source::Unavailable(reason) => {
                return Err(ConferenceError::resource_unavailable(name, reason));
            }
        };

        // Read behind the current contents; they are released only once the
        // new frame is complete.
        let start = out.len();
        out.resize(start + frame_size, 0);

        match read_frame(reader, &mut out[start..], name) {
            Ok(()) => {
                out.advance(start);
                Ok(())
            }
            Err(e) => {
                out.truncate(start);
                Err(e)
            }
        }
    }
}

impl<R> FileFrameGenerator<R> {
    fn build(
        name: String,
        source: Source<R>,
        store_len: Option<u64>,
        width: u32,
        height: u32,
        fps: u32,
    ) -> Self {
        Self {
            geometry: FrameGeometry::new(width, height),
            fps,
            frame_type: VideoFrameType::I420,
            name,
            source,
            store_len,
            scratch: BytesMut::new(),
        }
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn source_name(&self) -> &str {
        &self.name
    }

    pub fn is_available(&self) -> bool {
        matches!(self.source, Source::Ready(_))
    }

    /// Length of the backing store in bytes, when it could be determined.
    pub fn store_len(&self) -> Option<u64> {
        self.store_len
    }

    /// Complete frames in one pass over the store.
    pub fn whole_frames(&self) -> Option<u64> {
        let frame_size = self.geometry.frame_size() as u64;
        self.store_len.and_then(|len| len.checked_div(frame_size))
    }

    /// Bytes after the last complete frame; they are skipped on wraparound.
    pub fn trailing_bytes(&self) -> Option<u64> {
        let frame_size = self.geometry.frame_size() as u64;
        self.store_len.and_then(|len| len.checked_rem(frame_size))
    }
}

impl<R: Read + Seek + Send> VideoFrameGenerator for FileFrameGenerator<R> {
    fn frame_size(&self) -> usize {
        self.geometry.frame_size()
    }

    fn width(&self) -> u32 {
        self.geometry.width
    }

    fn height(&self) -> u32 {
        self.geometry.height
    }

    fn fps(&self) -> u32 {
        self.fps
    }

    fn frame_type(&self) -> VideoFrameType {
        self.frame_type
    }

    fn generate_next_frame(&mut self) -> Result<Bytes> {
        // The scratch allocation comes back on a later call once every frame
        // split from it has been dropped.
        let mut scratch = std::mem::take(&mut self.scratch);
        let result = self.next_frame_into(&mut scratch);
        let frame = result.map(|()| scratch.split().freeze());
        self.scratch = scratch;
        frame
    }
}

impl<R> Drop for FileFrameGenerator<R> {
    fn drop(&mut self) {
        if self.is_available() {
            debug!("Closing frame source {}", self.name);
        }
    }
}

/// Fill `frame` from the cursor, rewinding once if the store runs out.
fn read_frame<R: Read + Seek>(reader: &mut R, frame: &mut [u8], name: &str) -> Result<()> {
    let frame_size = frame.len();
    let read_error = |e: io::Error| ConferenceError::resource_unavailable(name, e);

    let read = read_full(reader, frame).map_err(read_error)?;
    if read == frame_size {
        return Ok(());
    }

    debug!("End of {} after {} bytes, rewinding", name, read);
    reader.rewind().map_err(read_error)?;

    let read = read_full(reader, frame).map_err(read_error)?;
    if read < frame_size {
        warn!(
            "Frame source {} holds less than one frame ({} of {} bytes)",
            name, read, frame_size
        );
        return Err(ConferenceError::IncompleteFrame {
            expected: frame_size,
            read,
        });
    }

    Ok(())
}

/// Read until `buf` is full or the store is exhausted, like `fread`.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn store_len<R: Seek>(reader: &mut R) -> io::Result<u64> {
    let position = reader.stream_position()?;
    let len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(position))?;
    Ok(len)
}
