use crate::entities::{
    BaseItemNode, Direction, DirectionNode, HierarchyConfig, PositionNode, ReceptionHeader,
    ReceptionHierarchy, ReceptionPreview, Totals, TransactionRow, WorkGroupNode,
};

use super::{
    expansion_state::{ExpansionState, NodePath},
    utils::{format_amount, format_quantity},
};

pub(crate) const NO_DATA_MESSAGE: &str = "Нет данных для отображения. Загрузите файл.";

const INDENT: &str = "    ";
const ITEM_NAME_WIDTH: usize = 60;

/// Renders a reception preview as an indented plain-text outline. Collapsed
/// nodes keep their summary line and hide everything below it.
pub(crate) struct HierarchyPrinter {
    config: HierarchyConfig,
}

impl HierarchyPrinter {
    pub(crate) fn new(config: &HierarchyConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub(crate) fn print(&self, preview: &ReceptionPreview, state: &ExpansionState) -> String {
        let mut outline = String::new();
        match preview {
            ReceptionPreview::NoData => {
                outline.push_str(NO_DATA_MESSAGE);
                outline.push('\n');
            }
            ReceptionPreview::Data(hierarchy) => self.print_hierarchy(&mut outline, hierarchy, state),
        }
        outline
    }

    fn print_hierarchy(
        &self,
        outline: &mut String,
        hierarchy: &ReceptionHierarchy,
        state: &ExpansionState,
    ) {
        self.print_header(outline, &hierarchy.header, &hierarchy.totals);
        outline.push('\n');
        outline.push_str(&format!("Двигатели ({})\n", hierarchy.positions.len()));
        for position in &hierarchy.positions {
            self.print_position(outline, position, state);
        }
    }

    fn print_header(&self, outline: &mut String, header: &ReceptionHeader, totals: &Totals) {
        outline.push_str("Информация о приемке\n");
        outline.push_str(&format!("{}Номер приемки: {}\n", INDENT, header.reception_number));
        outline.push_str(&format!("{}Дата приемки: {}\n", INDENT, header.reception_date));
        outline.push_str(&format!("{}Контрагент: {}\n", INDENT, header.counterparty_name));
        outline.push_str(&format!("{}Итого: {}\n", INDENT, self.format_totals(totals)));
    }

    fn print_position(&self, outline: &mut String, position: &PositionNode, state: &ExpansionState) {
        let path = NodePath::Position(position.key.clone());
        let expanded = state.is_expanded(&path);
        outline.push_str(&format!(
            "{} {} · {} · {}  {}\n",
            marker(expanded),
            position.key,
            position.header.service_name,
            position.header.subdivision_name,
            self.format_totals(&position.totals),
        ));
        if !expanded {
            return;
        }
        for work_group in &position.children {
            self.print_work_group(outline, position, work_group, state);
        }
    }

    fn print_work_group(
        &self,
        outline: &mut String,
        position: &PositionNode,
        work_group: &WorkGroupNode,
        state: &ExpansionState,
    ) {
        let path = NodePath::WorkGroup(position.key.clone(), work_group.key.clone());
        let expanded = state.is_expanded(&path);
        outline.push_str(&format!(
            "{}{} {}  {}\n",
            INDENT,
            marker(expanded),
            work_group.key,
            self.format_totals(&work_group.totals),
        ));
        if !expanded {
            return;
        }
        for base_item in &work_group.children {
            self.print_base_item(outline, position, work_group, base_item, state);
        }
    }

    fn print_base_item(
        &self,
        outline: &mut String,
        position: &PositionNode,
        work_group: &WorkGroupNode,
        base_item: &BaseItemNode,
        state: &ExpansionState,
    ) {
        let path = NodePath::BaseItem(
            position.key.clone(),
            work_group.key.clone(),
            base_item.key.clone(),
        );
        let expanded = state.is_expanded(&path);
        outline.push_str(&format!(
            "{}{} {}  {}\n",
            INDENT.repeat(2),
            marker(expanded),
            base_item.key,
            self.format_totals(&base_item.totals),
        ));
        if !expanded {
            return;
        }
        for direction in &base_item.children {
            let path = NodePath::Direction(
                position.key.clone(),
                work_group.key.clone(),
                base_item.key.clone(),
                direction.direction,
            );
            self.print_direction(outline, direction, state.is_expanded(&path));
        }
    }

    fn print_direction(&self, outline: &mut String, direction: &DirectionNode, expanded: bool) {
        let (arrow, sign) = match direction.direction {
            Direction::Income => ("↗", '+'),
            Direction::Expense => ("↘", '-'),
        };
        outline.push_str(&format!(
            "{}{} {} {}  {} {}\n",
            INDENT.repeat(3),
            marker(expanded),
            arrow,
            self.config.label(direction.direction),
            sign,
            format_amount(direction.total.abs(), self.config.currency),
        ));
        if !expanded {
            return;
        }
        for row in &direction.rows {
            self.print_row(outline, row);
        }
    }

    fn print_row(&self, outline: &mut String, row: &TransactionRow) {
        let indent = INDENT.repeat(4);
        let mut lines: Vec<String> = textwrap::wrap(&row.item_name, ITEM_NAME_WIDTH)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        let last = lines.pop().unwrap_or_default();
        for line in lines {
            outline.push_str(&format!("{}{}\n", indent, line));
        }
        outline.push_str(&format!(
            "{}{} × {}\n",
            indent,
            last,
            format_quantity(row.quantity)
        ));
    }

    fn format_totals(&self, totals: &Totals) -> String {
        format!(
            "↗ {}  ↘ {}  = {}",
            format_amount(totals.income_total, self.config.currency),
            format_amount(totals.expense_total.abs(), self.config.currency),
            format_amount(totals.net_total, self.config.currency),
        )
    }
}

fn marker(expanded: bool) -> char {
    if expanded {
        '▾'
    } else {
        '▸'
    }
}
