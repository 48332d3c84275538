//! Unit tests for am-field.
//!
//! Fields are drawn as text: `#` is a wall, anything else is open.

#[cfg(test)]
mod helpers {
    use crate::{Cell, CellField};

    pub fn field_from(rows: &[&str]) -> CellField {
        let cols = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|ch| if ch == '#' { Cell::wall() } else { Cell::empty() })
            .collect();
        CellField::from_cells(rows.len(), cols, cells)
    }

    /// The 1×2 maze: three open cells in a row.
    pub fn corridor() -> CellField {
        field_from(&["#####", "#   #", "#####"])
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }
}

// ── Cells & field ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use am_core::{Move, Pos, SimRng};
    use am_maze::MazeGenerator;

    use super::helpers::*;
    use crate::{CellField, Occupant};

    #[test]
    fn from_maze_copies_walls() {
        let maze = MazeGenerator::new(3, 4).generate(&mut SimRng::new(5)).unwrap();
        let field = CellField::from_maze(&maze);
        assert_eq!((field.rows(), field.cols()), (7, 9));
        for (pos, cell) in field.iter() {
            assert_eq!(cell.wall, maze.is_wall(pos), "{pos}");
            assert_eq!(cell.ant_count + cell.dwarf_count, 0);
        }
    }

    #[test]
    fn step_refuses_walls_and_edges() {
        let field = corridor();
        assert_eq!(field.step(Pos::new(1, 1), Move::RIGHT), Some(Pos::new(1, 2)));
        assert_eq!(field.step(Pos::new(1, 1), Move::LEFT), None);
        assert_eq!(field.step(Pos::new(0, 0), Move::UP), None);
        assert!(field.get(Pos::new(3, 0)).is_none());
    }

    #[test]
    fn occupant_priority() {
        let mut field = corridor();
        let p = Pos::new(1, 2);
        assert_eq!(field.cell(p).occupant(), Occupant::Empty);
        field.cell_mut(p).dwarf_count = 1;
        assert_eq!(field.cell(p).occupant(), Occupant::Dwarf);
        field.cell_mut(p).ant_count = 1;
        assert_eq!(field.cell(p).occupant(), Occupant::Ant);
        field.cell_mut(p).big_ant_count = 1;
        assert_eq!(field.cell(p).occupant(), Occupant::BigAnt);
        assert_eq!(field.cell(Pos::new(0, 0)).occupant(), Occupant::Wall);
        assert_eq!(field.to_string(), "#####\n# A #\n#####\n");
    }

    #[test]
    fn summary_totals() {
        let mut field = corridor();
        field.cell_mut(Pos::new(1, 1)).ant_count = 2;
        field.cell_mut(Pos::new(1, 1)).scent_ant = 0.5;
        field.cell_mut(Pos::new(1, 3)).dwarf_count = 3;
        field.cell_mut(Pos::new(1, 3)).scent_dwarf = 0.25;
        let s = field.summary();
        assert_eq!((s.ants, s.big_ants, s.dwarves), (2, 0, 3));
        assert!(approx(s.scent_ant, 0.5));
        assert!(approx(s.scent_dwarf, 0.25));
        assert!(approx(s.scent_food, 0.0));
    }

    #[test]
    fn queen_marker_is_inert() {
        let mut field = corridor();
        field.mark_queen(Pos::new(1, 1));
        assert!(field.cell(Pos::new(1, 1)).is_queen);
        assert_eq!(field.cell(Pos::new(1, 1)).occupant(), Occupant::Empty);
    }
}

// ── Movement policy ───────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use am_core::SimRng;

    use super::helpers::approx;
    use crate::{AgentKind, Cell, ant_weight, big_ant_weight, dwarf_weight};

    #[test]
    fn walls_weigh_zero() {
        let mut wall = Cell::wall();
        wall.scent_dwarf = 3.0;
        wall.dwarf_count = 1;
        assert_eq!(ant_weight(&wall), 0.0);
        assert_eq!(big_ant_weight(&wall), 0.0);
        assert_eq!(dwarf_weight(&wall), 0.0);
    }

    #[test]
    fn blank_cell_weighs_one() {
        let c = Cell::empty();
        assert!(approx(ant_weight(&c), 1.0));
        assert!(approx(big_ant_weight(&c), 1.0));
        assert!(approx(dwarf_weight(&c), 1.0));
    }

    #[test]
    fn ant_formula() {
        let mut c = Cell::empty();
        c.scent_ant = 0.01;
        c.scent_dwarf = 0.02;
        c.scent_food = 0.1;
        let expected = (-1.0f64 + 1.6 + 1.0).exp();
        assert!((ant_weight(&c) - expected).abs() < 1e-9);

        c.dwarf_count = 2;
        assert!((ant_weight(&c) / (expected * 10f64.exp()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn big_ant_formula() {
        let mut c = Cell::empty();
        c.scent_food = 0.01;
        c.scent_ant = 0.02;
        assert!((big_ant_weight(&c) - (0.8f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn dwarves_avoid_ants_regardless_of_scent() {
        let mut c = Cell::empty();
        c.ant_count = 1;
        for s in [0.0, 0.5, -0.0, 100.0] {
            c.scent_ant = s;
            c.scent_dwarf = s;
            assert_eq!(dwarf_weight(&c), 0.0);
        }
    }

    #[test]
    fn weights_never_negative() {
        let mut rng = SimRng::new(77);
        for _ in 0..5_000 {
            let c = Cell {
                wall:          rng.random::<f64>() < 0.2,
                is_queen:      false,
                ant_count:     rng.randint(0, 3) as u32,
                big_ant_count: 0,
                dwarf_count:   rng.randint(0, 3) as u32,
                scent_ant:     rng.random::<f64>() * 2.0,
                scent_dwarf:   rng.random::<f64>() * 2.0,
                scent_food:    rng.random::<f64>() * 2.0,
            };
            for kind in [AgentKind::Ant, AgentKind::BigAnt, AgentKind::Dwarf] {
                let w = kind.weight_fn()(&c);
                assert!(w >= 0.0, "{kind} weight {w} for {c:?}");
                if c.wall {
                    assert_eq!(w, 0.0);
                }
            }
        }
    }
}

// ── Weighted choice & next step ───────────────────────────────────────────────

#[cfg(test)]
mod choice {
    use am_core::{Move, Pos, ProcessId, ProcessRng};

    use super::helpers::*;
    use crate::{ant_weight, choose_weighted, dwarf_weight, pick_next};

    fn rng() -> ProcessRng {
        ProcessRng::new(2024, ProcessId(0))
    }

    #[test]
    fn empty_choices_yield_none() {
        let none: [u8; 0] = [];
        assert!(choose_weighted(&none, &[], rng().inner()).is_none());
    }

    #[test]
    fn zero_total_falls_back_to_uniform() {
        let mut r = rng();
        let choices = ['a', 'b', 'c'];
        let mut seen = [0usize; 3];
        for _ in 0..3_000 {
            let c = *choose_weighted(&choices, &[0.0, 0.0, 0.0], r.inner()).unwrap();
            seen[(c as u8 - b'a') as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n > 800), "{seen:?}");
    }

    #[test]
    fn zero_weight_only_chosen_by_exploration() {
        let mut r = rng();
        let draws = 20_000;
        let hits = (0..draws)
            .filter(|_| *choose_weighted(&[0, 1], &[0.0, 1.0], r.inner()).unwrap() == 0)
            .count();
        // Expected ≈ draws × 0.01 × ½ = 100.
        assert!(hits < 250, "zero-weight choice picked {hits} times");
    }

    #[test]
    fn proportional_to_weight() {
        let mut r = rng();
        let draws = 20_000;
        let heavy = (0..draws)
            .filter(|_| *choose_weighted(&[0, 1], &[1.0, 3.0], r.inner()).unwrap() == 1)
            .count();
        let frac = heavy as f64 / draws as f64;
        assert!((frac - 0.75).abs() < 0.03, "heavy fraction {frac}");
    }

    #[test]
    fn infinite_weight_falls_back_to_uniform() {
        let mut r = rng();
        let draws = 10_000;
        let hot = (0..draws)
            .filter(|_| *choose_weighted(&[0, 1], &[1.0, f64::INFINITY], r.inner()).unwrap() == 1)
            .count();
        let frac = hot as f64 / draws as f64;
        assert!((frac - 0.5).abs() < 0.05, "overflowing choice fraction {frac}");
    }

    #[test]
    fn never_lands_on_a_wall() {
        let field = corridor();
        let mut r = rng();
        for start in [Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)] {
            for last in Move::ALL {
                for _ in 0..200 {
                    let m = pick_next(&field, start, ant_weight, last, r.inner());
                    let dest = field.step(start, m);
                    assert!(dest.is_some(), "{start} + {m} is not valid");
                }
            }
        }
    }

    #[test]
    fn suppresses_immediate_backtrack() {
        let field = corridor();
        let mut r = rng();
        let draws = 10_000;
        let back = (0..draws)
            .filter(|_| pick_next(&field, Pos::new(1, 2), ant_weight, Move::RIGHT, r.inner()) == Move::LEFT)
            .count();
        // Only the exploration branch may go back: ≈ draws × 0.01 × ⅓.
        assert!(back < 100, "backtracked {back} times");
    }

    #[test]
    fn stay_is_not_suppressed_after_standing_still() {
        let field = corridor();
        let mut r = rng();
        let stays = (0..2_000)
            .filter(|_| pick_next(&field, Pos::new(1, 1), ant_weight, Move::STAY, r.inner()) == Move::STAY)
            .count();
        // Dead end: RIGHT and STAY both weigh 1.
        assert!((800..1_200).contains(&stays), "stayed {stays} times");
    }

    #[test]
    fn dead_end_after_arrival_prefers_staying() {
        let field = corridor();
        let mut r = rng();
        let stays = (0..2_000)
            .filter(|_| pick_next(&field, Pos::new(1, 1), ant_weight, Move::LEFT, r.inner()) == Move::STAY)
            .count();
        assert!(stays > 1_950, "stayed {stays} times");
    }

    #[test]
    fn isolated_cell_stays() {
        let field = field_from(&["###", "# #", "###"]);
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(pick_next(&field, Pos::new(1, 1), dwarf_weight, Move::UNREACHABLE, r.inner()), Move::STAY);
        }
    }

    #[test]
    fn dwarf_avoids_ant_cell() {
        let mut field = corridor();
        field.cell_mut(Pos::new(1, 3)).ant_count = 1;
        let mut r = rng();
        let onto_ant = (0..5_000)
            .filter(|_| pick_next(&field, Pos::new(1, 2), dwarf_weight, Move::UNREACHABLE, r.inner()) == Move::RIGHT)
            .count();
        assert!(onto_ant < 60, "dwarf walked onto ants {onto_ant} times");
    }
}

// ── Field dynamics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod dynamics {
    use am_core::{Pos, SimRng};
    use am_maze::MazeGenerator;

    use super::helpers::*;
    use crate::{CellField, diffuse, evaporate};

    #[test]
    fn evaporation_strictly_decreases_and_stays_positive() {
        let mut field = corridor();
        let p = Pos::new(1, 2);
        {
            let c = field.cell_mut(p);
            c.scent_ant = 1.0;
            c.scent_dwarf = 1.0;
            c.scent_food = 1.0;
        }
        let mut prev = *field.cell(p);
        for _ in 0..1_000 {
            evaporate(&mut field);
            let c = *field.cell(p);
            assert!(c.scent_ant < prev.scent_ant && c.scent_ant > 0.0);
            assert!(c.scent_dwarf < prev.scent_dwarf && c.scent_dwarf > 0.0);
            assert!(c.scent_food < prev.scent_food && c.scent_food > 0.0);
            prev = c;
        }
    }

    #[test]
    fn evaporation_rates() {
        let mut field = corridor();
        let p = Pos::new(1, 1);
        field.cell_mut(p).scent_ant = 1.0;
        field.cell_mut(p).scent_dwarf = 1.0;
        field.cell_mut(p).scent_food = 2.0;
        evaporate(&mut field);
        let c = field.cell(p);
        assert!(approx(c.scent_ant, 0.997));
        assert!(approx(c.scent_dwarf, 0.99));
        assert!(approx(c.scent_food, 1.994));
    }

    #[test]
    fn diffusion_applies_transfers_in_place() {
        let mut field = corridor();
        field.cell_mut(Pos::new(1, 1)).scent_dwarf = 1.0;
        diffuse(&mut field);
        assert!(approx(field.cell(Pos::new(1, 1)).scent_dwarf, 0.9709));
        assert!(approx(field.cell(Pos::new(1, 2)).scent_dwarf, 0.028_253_19));
        assert!(approx(field.cell(Pos::new(1, 3)).scent_dwarf, 0.000_846_81));
    }

    #[test]
    fn diffusion_only_moves_dwarf_scent() {
        let mut field = corridor();
        field.cell_mut(Pos::new(1, 2)).scent_ant = 1.0;
        field.cell_mut(Pos::new(1, 2)).scent_food = 1.0;
        diffuse(&mut field);
        assert_eq!(field.cell(Pos::new(1, 1)).scent_ant, 0.0);
        assert_eq!(field.cell(Pos::new(1, 2)).scent_food, 1.0);
    }

    #[test]
    fn diffusion_conserves_total_and_skips_walls() {
        let maze = MazeGenerator::new(8, 10).generate(&mut SimRng::new(31)).unwrap();
        let mut field = CellField::from_maze(&maze);
        let mut rng = SimRng::new(32);
        for pos in maze.open_cells().collect::<Vec<_>>() {
            field.cell_mut(pos).scent_dwarf = rng.random::<f64>();
        }
        let before = field.summary().scent_dwarf;
        for _ in 0..50 {
            diffuse(&mut field);
        }
        let after = field.summary().scent_dwarf;
        assert!((before - after).abs() < 1e-9 * before.max(1.0), "{before} → {after}");
        for (_, c) in field.iter().filter(|(_, c)| c.wall) {
            assert_eq!(c.scent_dwarf, 0.0);
        }
    }
}

// ── Parallel evaporation ──────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use am_core::SimRng;
    use am_maze::MazeGenerator;

    use crate::dynamics::{ANT_EVAPORATION, DWARF_EVAPORATION, FOOD_EVAPORATION};
    use crate::{CellField, evaporate};

    #[test]
    fn matches_sequential_reference() {
        let maze = MazeGenerator::new(20, 30).generate(&mut SimRng::new(4)).unwrap();
        let mut field = CellField::from_maze(&maze);
        let mut rng = SimRng::new(5);
        for pos in maze.open_cells().collect::<Vec<_>>() {
            let c = field.cell_mut(pos);
            c.scent_ant   = rng.random::<f64>() * 3.0;
            c.scent_dwarf = rng.random::<f64>() * 6.0;
            c.scent_food  = rng.random::<f64>();
        }

        let mut expected = field.cells().to_vec();
        for _ in 0..25 {
            for c in &mut expected {
                c.scent_ant   -= ANT_EVAPORATION * c.scent_ant;
                c.scent_dwarf -= DWARF_EVAPORATION * c.scent_dwarf;
                c.scent_food  -= FOOD_EVAPORATION * c.scent_food;
            }
            evaporate(&mut field);
        }
        assert_eq!(field.cells(), expected.as_slice());
    }
}
