//! Vietnamese strings shown on the registration page.
//!
//! [`failure_message`] is the single place a [`FailureKind`] turns into text.

use crate::error::FailureKind;

pub const TITLE: &str = "Đăng Ký";
pub const MISSING_REQUIRED: &str = "Vui lòng điền đầy đủ thông tin bắt buộc";
pub const PASSWORD_TOO_SHORT: &str = "Mật khẩu phải có ít nhất 6 ký tự";
pub const ALREADY_REGISTERED: &str = "Email này đã được đăng ký";
pub const INVALID_EMAIL: &str = "Email không hợp lệ";
pub const MISSING_IDENTITY: &str = "Không thể tạo tài khoản";
pub const DATABASE_FAILED: &str = "Lỗi lưu thông tin người dùng";
pub const GENERIC_FAILURE: &str = "Đăng ký thất bại. Vui lòng thử lại.";
pub const SUCCESS: &str = "Đăng ký thành công! Đang chuyển hướng...";

pub const LABEL_FULL_NAME: &str = "Họ và tên: *";
pub const LABEL_EMAIL: &str = "Email: *";
pub const LABEL_PHONE: &str = "Số điện thoại:";
pub const LABEL_PASSWORD: &str = "Mật khẩu: *";
pub const PLACEHOLDER_FULL_NAME: &str = "Nhập họ và tên";
pub const PLACEHOLDER_EMAIL: &str = "example@email.com";
pub const PLACEHOLDER_PHONE: &str = "0123456789";
pub const PLACEHOLDER_PASSWORD: &str = "Ít nhất 6 ký tự";
pub const SUBMIT: &str = "Đăng ký";
pub const SUBMITTING: &str = "Đang xử lý...";
pub const HAVE_ACCOUNT: &str = "Đã có tài khoản? ";
pub const SIGN_IN: &str = "Đăng nhập";

/// Message for a failure of the given kind.
///
/// `detail` is the raw message; it is only shown for [`FailureKind::Other`].
pub fn failure_message(kind: FailureKind, detail: &str) -> String {
    let text = match kind {
        FailureKind::MissingRequired => MISSING_REQUIRED,
        FailureKind::PasswordTooShort | FailureKind::WeakPassword => PASSWORD_TOO_SHORT,
        FailureKind::AlreadyRegistered => ALREADY_REGISTERED,
        FailureKind::InvalidEmail => INVALID_EMAIL,
        FailureKind::MissingIdentity => MISSING_IDENTITY,
        FailureKind::Database => DATABASE_FAILED,
        FailureKind::Other if detail.trim().is_empty() => GENERIC_FAILURE,
        FailureKind::Other => detail,
    };
    text.to_string()
}
