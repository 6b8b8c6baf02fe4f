//! Win32 message box.

use windows::core::HSTRING;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, IDYES, MB_ICONWARNING, MB_YESNO};

use super::{DialogChoice, MessageBox};

/// Modal Yes/No message box with a warning icon and no owner window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialog;

impl NativeDialog {
    pub fn new() -> Self {
        Self
    }
}

impl MessageBox for NativeDialog {
    fn prompt_yes_no(&mut self, body: &str, title: &str) -> DialogChoice {
        let answer = unsafe {
            MessageBoxW(
                HWND::default(),
                &HSTRING::from(body),
                &HSTRING::from(title),
                MB_YESNO | MB_ICONWARNING,
            )
        };
        DialogChoice::from(answer == IDYES)
    }
}
