//! DOCX path: body text via `docx-rs`.
//!
//! Paragraphs become lines; table cells are flattened into lines as well. Formatting and
//! embedded objects are ignored.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use super::ExtractionError;

pub fn extract_docx_text(content: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(content).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut lines: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => table_lines(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn table_lines(table: &Table, lines: &mut Vec<String>) {
    let rows = table.rows.iter().map(|child| match child {
        TableChild::TableRow(row) => row,
    });
    for row in rows {
        let cells = row.cells.iter().map(|child| match child {
            TableRowChild::TableCell(cell) => cell,
        });
        for cell in cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => table_lines(nested, lines),
                    _ => {}
                }
            }
        }
    }
}
