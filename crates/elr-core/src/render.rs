//! Token substitution into template text.

use crate::patient::PatientRecord;
use crate::token::Token;

/// Replace every occurrence of every recognized token in `template`
/// with the corresponding field of `patient`.
///
/// This is a single pass over the fixed token set using plain global
/// substring replacement: no word-boundary matching, no escaping of
/// the inserted values, and no re-scanning of text that was already
/// substituted in. All non-token text passes through byte-identical.
pub fn render(template: &str, patient: &PatientRecord) -> String {
    let mut out = template.to_string();
    for token in Token::ALL {
        out = out.replace(token.text(), token.value(patient));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_patient() -> PatientRecord {
        PatientRecord {
            first_name: "Ana".to_string(),
            middle_name: "Q".to_string(),
            last_name: "Diaz".to_string(),
            suffix: String::new(),
            sex: "F".to_string(),
            ssn: "123456789".to_string(),
            email: "ana@example.com".to_string(),
            street: "12 Peach St".to_string(),
            state: "GA".to_string(),
            city: "Athens".to_string(),
            zipcode: "30342".to_string(),
            building_number: "unit 4".to_string(),
            dob: "1990".to_string(),
            timestamp: "202401021530".to_string(),
        }
    }

    #[test]
    fn test_render_round_trip() {
        let rendered = render(
            "NAME:PATIENTFIRSTNAME PATIENTLASTNAME DOB:PATIENTDOB",
            &test_patient(),
        );
        assert_eq!(rendered, "NAME:Ana Diaz DOB:1990");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let rendered = render(
            "UUIDTIMESTAMP|UUIDTIMESTAMP|UUIDTIMESTAMP",
            &test_patient(),
        );
        assert_eq!(rendered, "202401021530|202401021530|202401021530");
    }

    #[test]
    fn test_render_leaves_unrecognized_text_untouched() {
        // Decoy text interleaved with real tokens passes through as-is,
        // including token-like words that are not in the fixed set.
        let rendered = render(
            "PID|PATIENTSUFFIX|PATIENTLASTNAME^PATIENTFIRSTNAME|NOTATOKEN",
            &test_patient(),
        );
        assert_eq!(rendered, "PID|PATIENTSUFFIX|Diaz^Ana|NOTATOKEN");
    }

    #[test]
    fn test_render_inserts_values_verbatim() {
        let mut patient = test_patient();
        patient.city = "  Athens  ".to_string();
        let rendered = render("CITY:PATIENTCITY;", &patient);
        assert_eq!(rendered, "CITY:  Athens  ;");
    }

    #[test]
    fn test_render_all_tokens_resolve() {
        let template = Token::ALL
            .iter()
            .map(|t| t.text())
            .collect::<Vec<_>>()
            .join("|");
        let rendered = render(&template, &test_patient());
        for token in Token::ALL {
            assert!(!rendered.contains(token.text()), "{} survived", token.text());
        }
    }
}
