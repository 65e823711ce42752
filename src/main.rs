use chord_drill::export::export_progress_to_path;
use chord_drill::*;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let drill = ChordDrill::open(&config, SystemClock)?;

    let stats = drill.stats()?;
    log::info!(
        "{} of {} chords reviewed, {} due",
        stats.tracked,
        drill.catalog().len(),
        stats.due
    );

    let next = drill.pick_next(&mut rand::thread_rng())?;
    println!("Next chord: {}", next);
    println!("Notes: {}", drill.spelling(&next).join(" "));

    if let Some(path) = &config.export_path {
        export_progress_to_path(drill.store(), path)?;
    }

    drill.close()
}
