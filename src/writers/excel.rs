use crate::Result;
use crate::metrics::MetricValue;
use crate::report::ReportTable;
use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::io::Write;

/// Name of the single sheet in the workbook
const SHEET_NAME: &str = "SonarQube Report";

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new().set_author("sonar-report");
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x00D9_E2F3))
        .set_border_bottom(FormatBorder::Thin);
    let left_align_format = Format::new().set_align(FormatAlign::Left);

    for (col_idx, title) in super::header(table).enumerate() {
        #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
        worksheet.write_string_with_format(0, col_idx as u16, title, &header_format)?;
    }

    // Keep the header row and the project keys in view while scrolling
    worksheet.set_freeze_panes(1, 1)?;

    let first_metric_col = super::PROJECT_COLUMNS.len();
    for (row_idx, row) in table.rows().iter().enumerate() {
        #[expect(clippy::cast_possible_truncation, reason = "Row index limited by Excel's u32 row limit")]
        let excel_row = (row_idx + 1) as u32;

        for (col_idx, cell) in super::project_cells(row).iter().enumerate() {
            if !cell.is_empty() {
                #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
                worksheet.write_string(excel_row, col_idx as u16, cell)?;
            }
        }

        for (value_idx, value) in row.values().iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
            let col = (first_metric_col + value_idx) as u16;
            write_metric_value(worksheet, excel_row, col, value, &left_align_format)?;
        }
    }

    worksheet.autofit();

    let data = workbook.save_to_buffer()?;
    writer.write_all(&data)?;

    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
fn write_metric_value(worksheet: &mut Worksheet, row: u32, col: u16, value: &MetricValue, format: &Format) -> Result<()> {
    match value {
        MetricValue::Missing => {}
        MetricValue::Number(n) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
        MetricValue::Rating(_) | MetricValue::Status(_) => {
            worksheet.write_string_with_format(row, col, value.to_string(), format)?;
        }
        MetricValue::Text(text) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Measure, Project};
    use crate::metrics::{MetricDef, MetricKind};

    fn catalog() -> Vec<MetricDef> {
        vec![
            MetricDef::new("alert_status", "Quality gate status", MetricKind::Status),
            MetricDef::new("bugs", "Number of bugs", MetricKind::Count),
            MetricDef::new("sqale_rating", "Maintainability rating", MetricKind::Rating),
            MetricDef::new("ncloc_language_distribution", "Lines of code per language", MetricKind::Text),
        ]
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetSystemTimePreciseAsFileTime (rust_xlsxwriter)")]
    fn test_generate_empty_table() {
        let table = ReportTable::new(catalog(), []);
        let mut output = Vec::new();
        generate(&table, &mut output).unwrap();
        assert_eq!(&output[0..2], b"PK");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetSystemTimePreciseAsFileTime (rust_xlsxwriter)")]
    fn test_generate_with_values() {
        let project = Project {
            name: Some("Project A".into()),
            tags: vec!["backend".into()],
            analysis_date: Some("2024-03-01T10:15:00+0000".into()),
            ..Project::new("A")
        };
        let mut table = ReportTable::new(catalog(), [project, Project::new("B")]);

        table.record(&Measure::new("A", "alert_status", "WARN")).unwrap();
        table.record(&Measure::new("A", "bugs", "12")).unwrap();
        table.record(&Measure::new("A", "ncloc_language_distribution", "java=1200;xml=40")).unwrap();
        table.record(&Measure::new("B", "sqale_rating", "3.0")).unwrap();

        let mut output = Vec::new();
        generate(&table, &mut output).unwrap();

        assert_eq!(table.value("B", "bugs"), Some(MetricValue::Missing));
        assert!(output.len() > 1000, "Excel output should be substantial");
        assert_eq!(&output[0..2], b"PK", "Excel file should be a valid ZIP archive");
    }
}
