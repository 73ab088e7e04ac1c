//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Suppression and isolation rules deciding whether a print point fires."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use clarity_config::{NodeKind, Settings};

/// Decide whether a print point fires. The first matching rule wins:
///
/// 1. `suppressAllClarityLogs` silences everything;
/// 2. `printAllClarityLogs` lets everything through;
/// 3. `logIsolatedPrintNumbersOnly` admits only isolated print numbers;
/// 4. any isolated entity admits only isolated entities;
/// 5. any isolated function rule admits only its entity, and only the listed
///    function numbers when the list is non-empty;
/// 6. `logFunctionNamesOnly` admits only function call points;
/// 7. `suppressLogFunctionNames` silences function call points;
/// 8. otherwise the print point fires.
pub fn should_emit(
    print_number: u32,
    entity_code: &str,
    function_number: u32,
    node_kind: NodeKind,
    settings: &Settings,
) -> bool {
    if settings.suppress_all_clarity_logs {
        return false;
    }
    if settings.print_all_clarity_logs {
        return true;
    }
    if settings.log_isolated_print_numbers_only {
        return settings.isolated_print_numbers.contains(&print_number);
    }

    let mut isolated_entities = settings.isolated_entity_codes().peekable();
    if isolated_entities.peek().is_some() {
        return isolated_entities.any(|code| code == entity_code);
    }

    let mut isolated_functions = settings.active_function_isolations().peekable();
    if isolated_functions.peek().is_some() {
        return isolated_functions.any(|(code, rule)| {
            code == entity_code
                && (rule.isolated_function_numbers.is_empty()
                    || rule.isolated_function_numbers.contains(&function_number))
        });
    }

    let is_function_call_point = node_kind == NodeKind::FunctionCallPoint;
    if settings.log_function_names_only {
        return is_function_call_point;
    }
    if settings.suppress_log_function_names && is_function_call_point {
        return false;
    }
    true
}
