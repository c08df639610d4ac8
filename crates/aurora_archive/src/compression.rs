//! Raw LZMA1 decompression of BZF resources.
//!
//! A compressed resource starts with the five LZMA1 property bytes, directly
//! followed by the raw LZMA1 stream. There is no `.lzma` header with an
//! uncompressed size, and many streams carry trailing bytes or end without
//! an end marker, so decoding stops as soon as the declared size has been
//! produced.

use byteorder::{ByteOrder, LittleEndian};
use liblzma::stream::{Action, Filters, LzmaOptions, Status, Stream};
use tracing::{instrument, trace, warn};

use crate::error::{Error, Result};

/// Size of the LZMA1 properties preceding each compressed resource
pub const LZMA1_PROPS_SIZE: usize = 5;

/// Largest valid properties byte, `(pb * 5 + lp) * 9 + lc` with pb = 4, lp = 4, lc = 8
const PROPS_BYTE_MAX: u8 = (4 * 5 + 4) * 9 + 8;

/// Largest valid `lc + lp`
const LCLP_MAX: u32 = 4;

/// Decoder settings stored in front of a raw LZMA1 stream
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LzmaProperties {
    /// Number of literal context bits (`lc`)
    pub literal_context_bits: u32,

    /// Number of literal position bits (`lp`)
    pub literal_position_bits: u32,

    /// Number of position bits (`pb`)
    pub position_bits: u32,

    /// Dictionary size in bytes
    pub dict_size: u32,
}

impl LzmaProperties {
    /// Parse the properties at the start of `data`
    pub fn decode(data: &[u8]) -> Result<Self> {
        let Some(props) = data.get(..LZMA1_PROPS_SIZE) else {
            return Err(Error::CodecProperties(format!(
                "need {LZMA1_PROPS_SIZE} bytes, got {}",
                data.len()
            )));
        };

        let byte = props[0];
        if byte > PROPS_BYTE_MAX {
            return Err(Error::CodecProperties(format!(
                "properties byte 0x{byte:02X} is out of range"
            )));
        }

        let byte = u32::from(byte);
        let properties = LzmaProperties {
            literal_context_bits: byte % 9,
            literal_position_bits: (byte / 9) % 5,
            position_bits: byte / 45,
            dict_size: LittleEndian::read_u32(&props[1..]),
        };

        if properties.literal_context_bits + properties.literal_position_bits > LCLP_MAX {
            return Err(Error::CodecProperties(format!(
                "lc ({}) + lp ({}) exceeds {LCLP_MAX}",
                properties.literal_context_bits, properties.literal_position_bits
            )));
        }

        Ok(properties)
    }

    fn raw_decoder(&self) -> Result<Stream> {
        let mut options = LzmaOptions::new_preset(6).map_err(Error::CodecUnsupported)?;
        options
            .dict_size(self.dict_size)
            .literal_context_bits(self.literal_context_bits)
            .literal_position_bits(self.literal_position_bits)
            .position_bits(self.position_bits);

        let mut filters = Filters::new();
        filters.lzma1(&options);

        Stream::new_raw_decoder(&filters).map_err(Error::CodecUnsupported)
    }
}

/// What to do after one call into the decoder
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    Continue,
    Finished,
}

/// Classify a decoder result, keeping the outcomes a truncated or
/// over-long stream produces as success.
fn step(result: core::result::Result<Status, liblzma::stream::Error>) -> Result<Step> {
    match result {
        Ok(Status::Ok) | Ok(Status::GetCheck) => Ok(Step::Continue),
        Ok(Status::StreamEnd) => Ok(Step::Finished),
        // LZMA_BUF_ERROR: the input is exhausted and no progress is possible
        Ok(Status::MemNeeded) => {
            trace!("compressed data ended early");
            Ok(Step::Finished)
        }
        // Corruption after the declared size, usually a missing or broken end marker
        Err(liblzma::stream::Error::Data) => {
            trace!("ignoring data error at end of stream");
            Ok(Step::Finished)
        }
        Err(e) => Err(Error::Decompression(e)),
    }
}

/// Decompress a BZF resource into a buffer of exactly `size` bytes.
///
/// Bytes the stream does not produce are left zeroed.
#[instrument(skip(data), fields(packed_size = data.len()), err)]
pub fn decompress(data: &[u8], size: usize) -> Result<Vec<u8>> {
    let properties = LzmaProperties::decode(data)?;
    let input = &data[LZMA1_PROPS_SIZE..];

    let mut stream = properties.raw_decoder()?;
    let mut output = vec![0u8; size];

    let mut stalled = false;
    loop {
        let consumed = stream.total_in() as usize;
        let produced = stream.total_out() as usize;
        if produced >= size {
            break;
        }

        let result = stream.process(&input[consumed..], &mut output[produced..], Action::Run);
        if step(result)? == Step::Finished {
            break;
        }

        let progress =
            stream.total_in() as usize != consumed || stream.total_out() as usize != produced;
        if !progress && stalled {
            break;
        }
        stalled = !progress;
    }

    let produced = stream.total_out() as usize;
    if produced < size {
        warn!(produced, size, "resource decompressed short of its size");
    }

    Ok(output)
}
