#![no_main]

use hamlet::{SimConfig, Village};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Any config that loads must start a village and survive a few days.
    if let Ok(config) = SimConfig::from_json_str(json) {
        let Ok(mut village) = Village::with_config(config) else {
            panic!("validated config was refused");
        };
        village.add_worker("Amber", "farmer");
        village.add_worker("Bob", "builder");
        for _ in 0..10 {
            village.day();
        }
    }
});
