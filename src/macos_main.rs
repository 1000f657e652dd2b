//! macOS entry point: open the preferences window and run the AppKit loop.

use freeruler::platform::macos::bridge::{autoreleasepool, msg_send, NSApp};
use freeruler::platform::macos::open_preferences;
use freeruler::{PrefsCache, Result};

// NSApplicationActivationPolicyRegular
const ACTIVATION_POLICY_REGULAR: isize = 0;

pub fn run(cache: PrefsCache) -> Result<()> {
    autoreleasepool(|| -> Result<()> {
        unsafe {
            let app = NSApp();
            let _: bool = msg_send![app, setActivationPolicy: ACTIVATION_POLICY_REGULAR];

            open_preferences(cache)?;

            let _: () = msg_send![app, run];
        }
        Ok(())
    })
}
