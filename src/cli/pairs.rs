use super::ui::{self, Palette};
use crate::core::CurrencyPair;
use crate::core::pair::HOME_CURRENCY;
use comfy_table::Cell;

pub fn render_pairs(palette: &Palette) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        palette.header_cell("Pair"),
        palette.header_cell("Currency"),
        palette.header_cell("Quoted in"),
    ]);
    for pair in CurrencyPair::ALL {
        table.add_row(vec![
            Cell::new(pair.code()),
            Cell::new(pair.label()),
            Cell::new(HOME_CURRENCY),
        ]);
    }
    table.to_string()
}

pub fn run(palette: &Palette) {
    println!("{}", render_pairs(palette));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Theme;

    #[test]
    fn test_lists_every_pair() {
        let rendered = render_pairs(&Palette::new(Theme::Dark));
        for pair in CurrencyPair::ALL {
            assert!(rendered.contains(&pair.code()));
        }
        assert!(rendered.contains("IDR - Indonesian Rupiah"));
    }
}
