pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}
