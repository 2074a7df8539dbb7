//! Fill command implementation
//!
//! Fills a byte buffer from a generator and prints it as a hex dump.

use rng_engine::{Generator, GeneratorKind};
use tracing::info;

use crate::report::hex_dump;
use crate::Result;

/// Run the fill command
pub fn run(kind: GeneratorKind, seed: u64, bytes: usize) -> Result<()> {
    let mut rng = Generator::new(kind, seed, None)?;
    info!(%kind, seed = rng.seed(), bytes, "filling buffer");

    let buffer = fill(&mut rng, bytes)?;
    println!("{} bytes from {} (seed {}):", bytes, kind, rng.seed());
    print!("{}", hex_dump(&buffer));
    Ok(())
}

fn fill(rng: &mut Generator, bytes: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; bytes];
    rng.fill_bytes(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use rng_engine::RngError;

    #[test]
    fn test_fill_known_bytes() {
        let mut rng = Generator::new(GeneratorKind::FastXor256, 42, None).unwrap();
        let buffer = fill(&mut rng, 11).unwrap();
        assert_eq!(
            buffer,
            [0x2f, 0xdf, 0xbe, 0xaf, 0x86, 0xfe, 0x1c, 0x5e, 0xd7, 0x89, 0x9d]
        );
    }

    #[test]
    fn test_fill_zero_bytes_is_error() {
        let mut rng = Generator::new(GeneratorKind::FastXor256, 42, None).unwrap();
        assert!(matches!(
            fill(&mut rng, 0),
            Err(CliError::Engine(RngError::EmptyBuffer))
        ));
    }
}
