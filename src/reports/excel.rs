//! Excel report generation.

use crate::Result;
use crate::views::{Cell, ViewTable};
use rust_xlsxwriter::{DocProperties, Format, Workbook, Worksheet};
use std::io::Write;

/// Generate a workbook with one worksheet per view.
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or written
#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate<W: Write>(tables: &[ViewTable], writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_title("Catalog exploratory views").set_author("catalog-eda"));

    let bold = Format::new().set_bold();
    let percent = Format::new().set_num_format("0.0%");

    for table in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.kind.sheet_name())?;
        write_table(worksheet, table, &bold, &percent)?;
    }

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
fn write_table(worksheet: &mut Worksheet, table: &ViewTable, bold: &Format, percent: &Format) -> Result<()> {
    worksheet.write_string_with_format(0, 0, table.kind.title(), bold)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(2, u16::try_from(col)?, header, bold)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let r = u32::try_from(index + 3)?;
        for (col, cell) in row.iter().enumerate() {
            let c = u16::try_from(col)?;
            match cell {
                Cell::Text(text) => worksheet.write_string(r, c, text)?,
                Cell::Year(year) => worksheet.write_number(r, c, f64::from(*year))?,
                Cell::Count(count) => {
                    #[expect(clippy::cast_precision_loss, reason = "counts fit in f64")]
                    let value = *count as f64;
                    worksheet.write_number(r, c, value)?
                }
                Cell::Share(share) => worksheet.write_number_with_format(r, c, *share, percent)?,
            };
        }
    }

    if table.is_empty() {
        worksheet.write_string(3, 0, super::common::NO_DATA)?;
    }

    worksheet.set_freeze_panes(3, 0)?;
    worksheet.autofit();
    Ok(())
}
