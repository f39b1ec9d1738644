#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // A parsed deployment keeps the exact spelling it came from
        if let Ok(deployment) = mfd::Deployment::parse(name) {
            assert_eq!(deployment.name(), name);
            let reparsed = mfd::Deployment::parse(&deployment.name()).unwrap();
            assert_eq!(reparsed, deployment);
        }
    }
});
