//! JavaScript snippets evaluated in page WebViews.

use skiff_common::InputCommand;

pub const HISTORY_BACK_SCRIPT: &str = "history.back();";
pub const HISTORY_FORWARD_SCRIPT: &str = "history.forward();";
pub const RELOAD_SCRIPT: &str = "location.reload();";

/// Build the script that applies `command` to the page's focused field.
///
/// Only `INPUT` and `TEXTAREA` elements are touched. Characters are passed
/// as JSON string literals. Backspace removes one code point. An `input`
/// event is dispatched after every change so page scripts see the edit.
/// The script evaluates to `true` when it changed something.
pub fn input_command_script(command: &InputCommand) -> String {
    let edit = match command {
        InputCommand::AppendChar(c) => {
            let literal = serde_json::to_string(&c.to_string())
                .unwrap_or_else(|_| "\"\"".to_string());
            format!("el.value = el.value + {literal};")
        }
        InputCommand::Backspace => {
            "if (!el.value) { return false; } \
             el.value = Array.from(el.value).slice(0, -1).join('');"
                .to_string()
        }
        InputCommand::Clear => "if (!el.value) { return false; } el.value = '';".to_string(),
    };

    format!(
        "(function() {{ \
         var el = document.activeElement; \
         if (!el || (el.tagName !== 'INPUT' && el.tagName !== 'TEXTAREA')) {{ return false; }} \
         {edit} \
         el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
         return true; \
         }})();"
    )
}
