use crate::model::{Day, Member};

/// Indices des membres reposés pour `day` ; liste complète si personne ne l'est.
pub(super) fn candidates(members: &[Member], day: &Day) -> (Vec<usize>, bool) {
    let rested: Vec<usize> = members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.record.is_rested_for(day.date))
        .map(|(idx, _)| idx)
        .collect();

    if rested.is_empty() {
        ((0..members.len()).collect(), true)
    } else {
        (rested, false)
    }
}

/// Premier candidat selon (compteur du type, total) ; `min_by_key` garde le premier ex aequo.
pub(super) fn pick(members: &[Member], candidates: &[usize], day: &Day) -> Option<usize> {
    candidates.iter().copied().min_by_key(|&idx| {
        let rec = &members[idx].record;
        (rec.count(day.kind), rec.total())
    })
}
