use crate::schema::SkiffConfig;

pub(super) fn validate_keyboard(errors: &mut Vec<String>, config: &SkiffConfig) {
    let rows = &config.keyboard.rows;
    if rows.iter().all(|r| r.is_empty()) {
        errors.push("keyboard.rows must contain at least one key".into());
    }
    for (i, row) in rows.iter().enumerate() {
        if let Some(c) = row.chars().find(|c| c.is_control() || c.is_whitespace()) {
            errors.push(format!(
                "keyboard.rows[{i}] contains {c:?}; only printable characters are allowed"
            ));
        }
    }
}
