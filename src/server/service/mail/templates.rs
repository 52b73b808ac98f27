//! Message bodies for account mail.

use crate::server::service::mail::OutboundEmail;

const BRAND: &str = "Sufrikh";

/// Escapes text for interpolation into HTML bodies.
pub fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Verification code mail.
pub fn otp_email(to: &str, code: &str, expiry_minutes: i64) -> OutboundEmail {
    OutboundEmail {
        to: to.to_string(),
        subject: format!("Your {BRAND} verification code"),
        text: format!(
            "Your verification code is {code}. It expires in {expiry_minutes} minutes.\n\n\
             If you did not request this code you can ignore this email."
        ),
        html: Some(format!(
            "<p>Your verification code is:</p>\
             <h2 style=\"letter-spacing:4px\">{code}</h2>\
             <p>It expires in {expiry_minutes} minutes.</p>\
             <p>If you did not request this code you can ignore this email.</p>",
            code = html_escape(code),
        )),
    }
}

/// Password reset link mail.
pub fn password_reset_email(to: &str, name: &str, reset_url: &str) -> OutboundEmail {
    OutboundEmail {
        to: to.to_string(),
        subject: format!("{BRAND} password reset"),
        text: format!(
            "Hello {name},\n\nUse the link below to reset your password. \
             It is valid for one hour.\n\n{reset_url}\n\n\
             If you did not request a reset you can ignore this email."
        ),
        html: Some(format!(
            "<p>Hello {name},</p>\
             <p>Use the link below to reset your password. It is valid for one hour.</p>\
             <p><a href=\"{url}\">Reset password</a></p>\
             <p>If you did not request a reset you can ignore this email.</p>",
            name = html_escape(name),
            url = html_escape(reset_url),
        )),
    }
}

/// Invitation for an admin-created account carrying its temporary password.
///
/// # Arguments
/// - `role_title` - `Administrator` or `Staff Member`
pub fn invite_email(
    to: &str,
    role_title: &str,
    inviter_name: &str,
    temp_password: &str,
    login_url: &str,
) -> OutboundEmail {
    OutboundEmail {
        to: to.to_string(),
        subject: format!("Your {BRAND} {role_title} Account Invitation"),
        text: format!(
            "You've been invited by {inviter_name} to join {BRAND} as a {role_title}.\n\n\
             Temporary password: {temp_password}\n\n\
             Log in at {login_url} and change your password immediately."
        ),
        html: Some(format!(
            "<p>Dear User,</p>\
             <p>You've been invited by {inviter} to join {BRAND} as a {role}.</p>\
             <p><strong>Temporary Password:</strong> {password}</p>\
             <p>Please login at <a href=\"{url}\">{url}</a> and change your password immediately.</p>\
             <p>If you didn't request this, please contact support immediately.</p>",
            inviter = html_escape(inviter_name),
            role = html_escape(role_title),
            password = html_escape(temp_password),
            url = html_escape(login_url),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn invite_escapes_inviter_name() {
        let email = invite_email(
            "new@example.com",
            "Administrator",
            "<script>",
            "Temp!23",
            "https://app.example.com/login",
        );

        let html = email.html.unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(email.text.contains("Temp!23"));
    }

    #[test]
    fn otp_email_contains_code() {
        let email = otp_email("guest@example.com", "123456", 10);

        assert!(email.text.contains("123456"));
        assert!(email.text.contains("10 minutes"));
    }
}
