//! Export dialects of the supported CAE tools and spreadsheets
//!
//! Layouts follow what each tool accepts when pasted back in. Nastran and
//! Patran session output wrap at 70 columns.

use super::registry::{ExportError, Exporter};

const MAX_LINE_LENGTH: usize = 70;

/// Spreadsheet row, comma separated
pub struct CalcLineComma;

impl Exporter for CalcLineComma {
    fn name(&self) -> &str {
        "calc-line-comma"
    }

    fn description(&self) -> &str {
        "Calc/Excel (as line, comma-separated)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        Ok(format!("{}\n", items.join(",")))
    }
}

/// Spreadsheet row, tab separated
pub struct CalcLineTab;

impl Exporter for CalcLineTab {
    fn name(&self) -> &str {
        "calc-line-tab"
    }

    fn description(&self) -> &str {
        "Calc/Excel (as line, tab-separated)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        Ok(format!("{}\n", items.join("\t")))
    }
}

/// Spreadsheet column, one item per line
pub struct CalcColumn;

impl Exporter for CalcColumn {
    fn name(&self) -> &str {
        "calc-column"
    }

    fn description(&self) -> &str {
        "Calc/Excel (as column)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        Ok(items.iter().map(|item| format!("{item}\n")).collect())
    }
}

/// Nastran bulk `SET` card, comma separated, continuation lines indented
/// by one 8-character field
pub struct Nastran;

impl Exporter for Nastran {
    fn name(&self) -> &str {
        "nastran"
    }

    fn description(&self) -> &str {
        "Nastran Bulk file (comma-separated)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        const FIELD: &str = "        ";

        let mut out = String::from("$\nSET 1 = ");
        let mut line_length = FIELD.len();
        let last = items.len().saturating_sub(1);

        for (i, item) in items.iter().enumerate() {
            if line_length + item.len() + 1 > MAX_LINE_LENGTH {
                out.push('\n');
                out.push_str(FIELD);
                line_length = FIELD.len();
            }
            out.push_str(item);
            if i < last {
                out.push(',');
                line_length += item.len() + 1;
            }
        }

        out.push_str("\n$\n");
        Ok(out)
    }
}

/// Patran list box: `Elm 1:3 9`
pub struct PatranElements;

impl Exporter for PatranElements {
    fn name(&self) -> &str {
        "patran-elements"
    }

    fn description(&self) -> &str {
        "Patran (as elements)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        Ok(format!("Elm {}", items.join(" ")))
    }
}

/// Patran session file creating a group of elements
///
/// Wrapped lines use the `" // @` continuation, which the tokenizer strips,
/// so the output parses back to the same set.
pub struct PatranSession;

impl Exporter for PatranSession {
    fn name(&self) -> &str {
        "patran-session"
    }

    fn description(&self) -> &str {
        "Patran Session file (as elements)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        const HEADER: &str = "# ############################## \n\
                              #     Patran Session file        \n\
                              # ############################## \n\
                              ga_group_create( \"group\" )\n";
        const ENTITY_ADD: &str = "ga_group_entity_add( \"group\", \" Element ";

        let mut out = String::from(HEADER);
        out.push_str(ENTITY_ADD);
        let mut line_length = ENTITY_ADD.len();
        let last = items.len().saturating_sub(1);

        for (i, item) in items.iter().enumerate() {
            ExportError::check_unstepped("Patran Session file", item)?;

            if line_length + item.len() + 8 > MAX_LINE_LENGTH {
                out.push_str("\" // @\n\"");
                line_length = 1;
            }
            out.push_str(item);
            if i < last {
                out.push(' ');
                line_length += item.len() + 1;
            }
        }

        out.push_str(" \" )\n#\n");
        Ok(out)
    }
}

/// Femap entity selection, comma separated
pub struct Femap;

impl Exporter for Femap {
    fn name(&self) -> &str {
        "femap"
    }

    fn description(&self) -> &str {
        "Femap (as elements)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        Ok(items.join(","))
    }
}

/// HyperMesh selection: `el 1-3,9`. HyperMesh has no stepped ranges.
pub struct HyperMesh;

impl Exporter for HyperMesh {
    fn name(&self) -> &str {
        "hypermesh"
    }

    fn description(&self) -> &str {
        "HyperMesh (as elements)"
    }

    fn export(&self, items: &[String]) -> Result<String, ExportError> {
        let converted = items
            .iter()
            .map(|item| {
                ExportError::check_unstepped("HyperMesh", item)?;
                Ok(item.replace(':', "-"))
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        Ok(format!("el {}", converted.join(",")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_calc_lines() {
        let data = items(&["1:3", "9"]);
        assert_eq!(CalcLineComma.export(&data).unwrap(), "1:3,9\n");
        assert_eq!(CalcLineTab.export(&data).unwrap(), "1:3\t9\n");
        assert_eq!(CalcColumn.export(&data).unwrap(), "1:3\n9\n");
    }

    #[test]
    fn test_calc_empty() {
        assert_eq!(CalcLineComma.export(&[]).unwrap(), "\n");
        assert_eq!(CalcColumn.export(&[]).unwrap(), "");
    }

    #[test]
    fn test_nastran_short() {
        let data = items(&["100:102", "109", "110"]);
        assert_eq!(
            Nastran.export(&data).unwrap(),
            "$\nSET 1 = 100:102,109,110\n$\n"
        );
    }

    #[test]
    fn test_nastran_wraps_at_70_columns() {
        let data: Vec<String> = (10_000_000..10_000_010).map(|id| id.to_string()).collect();
        let output = Nastran.export(&data).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "$");
        assert_eq!(
            lines[1],
            "SET 1 = 10000000,10000001,10000002,10000003,10000004,10000005,"
        );
        assert_eq!(lines[2], "        10000006,10000007,10000008,10000009");
        assert_eq!(lines[3], "$");
        assert!(lines.iter().all(|line| line.len() <= 70));
    }

    #[test]
    fn test_patran_elements() {
        let data = items(&["1:3", "9"]);
        assert_eq!(PatranElements.export(&data).unwrap(), "Elm 1:3 9");
    }

    #[test]
    fn test_patran_session_short() {
        let data = items(&["1:3", "9"]);
        let expected = "# ############################## \n\
                        #     Patran Session file        \n\
                        # ############################## \n\
                        ga_group_create( \"group\" )\n\
                        ga_group_entity_add( \"group\", \" Element 1:3 9 \" )\n\
                        #\n";
        assert_eq!(PatranSession.export(&data).unwrap(), expected);
    }

    #[test]
    fn test_patran_session_wraps() {
        let data: Vec<String> = (30_110_001..30_110_006).map(|id| id.to_string()).collect();
        let output = PatranSession.export(&data).unwrap();
        assert!(output.contains(
            "\" Element 30110001 30110002 \" // @\n\"30110003 30110004 30110005 \" )\n"
        ));
    }

    #[test]
    fn test_patran_session_rejects_stepped_items() {
        let data = items(&["1:3", "32002012:32002098:20"]);
        let error = PatranSession.export(&data).unwrap_err();
        assert_eq!(
            error,
            ExportError::PackedItem {
                format: "Patran Session file".into(),
                item: "32002012:32002098:20".into(),
                column: 8,
            }
        );
    }

    #[test]
    fn test_femap() {
        assert_eq!(Femap.export(&items(&["1:3", "9"])).unwrap(), "1:3,9");
    }

    #[test]
    fn test_hypermesh() {
        let data = items(&["1:45", "50"]);
        assert_eq!(HyperMesh.export(&data).unwrap(), "el 1-45,50");
    }

    #[test]
    fn test_hypermesh_rejects_stepped_items() {
        let data = items(&["115:131:8"]);
        assert!(matches!(
            HyperMesh.export(&data),
            Err(ExportError::PackedItem { .. })
        ));
    }
}
