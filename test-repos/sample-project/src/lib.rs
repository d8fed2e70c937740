use tracing::info;

pub fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
    info!(input, "parsing");
    input.trim().parse()
}
