use log::{debug, trace, warn};

use crate::entities::{
    BaseItemNode, DirectionNode, GroupNode, HierarchyConfig, PositionHeader, PositionNode,
    PositionNumber, ReceptionHeader, ReceptionHierarchy, ReceptionPreview, TransactionRow,
    WorkGroupNode,
};

use super::{
    grouping::{group_base_items, group_directions, group_positions, group_work_groups},
    totals::{compute_totals, cross_check, magnitude},
};

/// Builds the position → work group → base item → direction tree from a flat
/// list of rows. Totals are computed independently at every level from the
/// rows that level owns, then compared with the sum of its children; a
/// disagreement beyond rounding is logged and the recomputed totals are kept.
pub(crate) struct HierarchyProcessor<'c> {
    rows: Vec<TransactionRow>,
    config: &'c HierarchyConfig,
}

impl<'c> HierarchyProcessor<'c> {
    pub(crate) fn new(rows: Vec<TransactionRow>, config: &'c HierarchyConfig) -> Self {
        Self { rows, config }
    }

    pub(crate) fn process(self) -> ReceptionPreview {
        let Self { rows, config } = self;

        let Some(first) = rows.first() else {
            warn!("no rows to build a reception hierarchy from");
            return ReceptionPreview::NoData;
        };
        let header = ReceptionHeader::from_row(first);
        let totals = compute_totals(&rows, config.expense_sign);
        let row_magnitude = magnitude(&rows, config.expense_sign);
        let num_rows = rows.len();

        let positions = group_positions(rows)
            .into_iter()
            .map(|(number, rows)| Self::build_position(config, number, rows))
            .collect::<Vec<_>>();
        cross_check(
            "reception",
            &header.reception_number,
            &totals,
            row_magnitude,
            &positions,
            config.totals_tolerance,
        );

        debug!(
            "built reception hierarchy '{}': {} rows, {} positions",
            header.reception_number,
            num_rows,
            positions.len()
        );
        ReceptionPreview::Data(ReceptionHierarchy {
            header,
            totals,
            positions,
        })
    }

    fn build_position(
        config: &HierarchyConfig,
        number: PositionNumber,
        rows: Vec<TransactionRow>,
    ) -> PositionNode {
        // Grouping never yields an empty bucket.
        let header = rows
            .first()
            .map(|r| PositionHeader {
                service_name: r.service_name.clone(),
                subdivision_name: r.subdivision_name.clone(),
            })
            .unwrap_or_else(|| PositionHeader {
                service_name: String::new(),
                subdivision_name: String::new(),
            });
        let totals = compute_totals(&rows, config.expense_sign);
        let row_magnitude = magnitude(&rows, config.expense_sign);
        let children = group_work_groups(rows)
            .into_iter()
            .map(|(work_group, rows)| Self::build_work_group(config, work_group, rows))
            .collect::<Vec<_>>();
        cross_check(
            "position",
            &number.to_string(),
            &totals,
            row_magnitude,
            &children,
            config.totals_tolerance,
        );
        trace!("position {}: {} work groups", number, children.len());
        GroupNode {
            key: number,
            header,
            totals,
            children,
        }
    }

    fn build_work_group(
        config: &HierarchyConfig,
        work_group: String,
        rows: Vec<TransactionRow>,
    ) -> WorkGroupNode {
        let totals = compute_totals(&rows, config.expense_sign);
        let row_magnitude = magnitude(&rows, config.expense_sign);
        let children = group_base_items(rows, &config.base_item_delimiter)
            .into_iter()
            .map(|(base_name, rows)| Self::build_base_item(config, base_name, rows))
            .collect::<Vec<_>>();
        cross_check(
            "work group",
            &work_group,
            &totals,
            row_magnitude,
            &children,
            config.totals_tolerance,
        );
        GroupNode {
            key: work_group,
            header: (),
            totals,
            children,
        }
    }

    fn build_base_item(
        config: &HierarchyConfig,
        base_name: String,
        rows: Vec<TransactionRow>,
    ) -> BaseItemNode {
        let totals = compute_totals(&rows, config.expense_sign);
        let row_magnitude = magnitude(&rows, config.expense_sign);
        let children: Vec<DirectionNode> = group_directions(rows)
            .into_iter()
            .map(|(direction, rows)| DirectionNode {
                direction,
                total: compute_totals(&rows, config.expense_sign).for_direction(direction),
                rows,
            })
            .collect();
        cross_check(
            "base item",
            &base_name,
            &totals,
            row_magnitude,
            &children,
            config.totals_tolerance,
        );
        GroupNode {
            key: base_name,
            header: (),
            totals,
            children,
        }
    }
}
