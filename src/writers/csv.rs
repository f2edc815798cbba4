use crate::Result;
use crate::report::ReportTable;
use std::io::Write;

pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(super::header(table))?;

    for row in table.rows() {
        let mut record = super::project_cells(row).to_vec();
        record.extend(row.values().iter().map(ToString::to_string));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
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
            MetricDef::new("security_rating", "Security rating", MetricKind::Rating),
            MetricDef::new("coverage", "Test coverage", MetricKind::Percent),
        ]
    }

    const HEADER: &str = "key,name,qualifier,visibility,tags,analysisDate,alert_status,bugs,security_rating,coverage";

    fn render(table: &ReportTable) -> String {
        let mut output = Vec::new();
        generate(table, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_generate_empty_table() {
        let table = ReportTable::new(catalog(), []);
        assert_eq!(render(&table), format!("{HEADER}\n"));
    }

    #[test]
    fn test_generate_missing_values_are_empty() {
        let table = ReportTable::new(catalog(), [Project::new("A")]);
        assert_eq!(
            render(&table),
            format!("{HEADER}\nA,,,,,,,,,\n")
        );
    }

    #[test]
    fn test_generate_values() {
        let project = Project {
            name: Some("Backend API".into()),
            qualifier: Some("TRK".into()),
            visibility: Some("private".into()),
            tags: vec!["backend".into(), "java".into()],
            analysis_date: Some("2024-03-01T10:15:00+0000".into()),
            ..Project::new("backend-api")
        };
        let mut table = ReportTable::new(catalog(), [project, Project::new("backend-worker")]);
        table.record(&Measure::new("backend-api", "alert_status", "OK")).unwrap();
        table.record(&Measure::new("backend-api", "bugs", "2")).unwrap();
        table.record(&Measure::new("backend-api", "security_rating", "1.0")).unwrap();
        table.record(&Measure::new("backend-api", "coverage", "85.5")).unwrap();
        table.record(&Measure::new("backend-worker", "bugs", "0")).unwrap();

        assert_eq!(
            render(&table),
            format!(
                "{HEADER}\n\
                 backend-api,Backend API,TRK,private,\"backend,java\",2024-03-01T10:15:00+0000,OK,2,A,85.5\n\
                 backend-worker,,,,,,,0,,\n"
            )
        );
    }

    #[test]
    fn test_generate_quotes_special_characters() {
        let project = Project {
            name: Some("Legacy, \"classic\" edition".into()),
            ..Project::new("legacy")
        };
        let table = ReportTable::new(catalog(), [project]);
        let output = render(&table);
        assert!(output.contains("legacy,\"Legacy, \"\"classic\"\" edition\",,"));
    }
}
