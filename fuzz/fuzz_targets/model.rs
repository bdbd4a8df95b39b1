#![no_main]

use libfuzzer_sys::fuzz_target;
use metagen::{DeclarationModel, GeneratorConfig, generate_model};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any model that loads must classify and render without panicking
        if let Ok(model) = DeclarationModel::from_json(s) {
            let _ = generate_model(&model, &GeneratorConfig::default());
        }
    }
});
