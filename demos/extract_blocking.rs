use usgs::blocking::Usgs;
use usgs::{UsgsError, PARAM_DISCHARGE, PARAM_GAGE_HEIGHT};

fn main() -> Result<(), UsgsError> {
    env_logger::init();

    // Illinois River at Kingston Mines, open ended: up to now
    let values = Usgs::new()
        .instantaneous_values()
        .site("05568500")
        .parameter_codes([PARAM_DISCHARGE, PARAM_GAGE_HEIGHT])
        .start_date("2024-05-01")
        .call()?;

    println!("{}", values.frame);

    Ok(())
}
