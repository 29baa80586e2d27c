use log::LevelFilter;
use numerals::{Int2, Int4};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let mut bounds = Int4::new(0, 0, 10, 10);
    log::info!("Bounds: {}", serde_json::to_string(&bounds)?);

    for point in [Int2::new(5, 5), Int2::new(10, 10), Int2::new(11, 5)] {
        log::info!("contains({}, {}) = {}", point.x, point.y, bounds.contains(point));
    }

    let other = Int4::new(-5, 2, 3, 20);
    log::debug!("Merging {:?} into {:?}.", other, bounds);
    bounds.merge(&other);

    let rect = bounds.as_rect();
    log::info!(
        "Merged: left={} bottom={} right={} top={}",
        rect.left, rect.bottom, rect.right, rect.top
    );
    log::info!("As json: {}", serde_json::to_string(&bounds)?);

    Ok(())
}
