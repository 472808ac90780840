use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::iter::zip;

mod almanac;
use almanac::{apply_chain, Interval, IntervalSet, Rule, Table};

fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

fn day1(part: u8, input: &str) -> String {
    let words = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
    input.trim().lines().map(|line| {
        let digit_at = |i: usize| {
            let rest = &line[i..];
            let c = rest.as_bytes()[0];
            if c.is_ascii_digit() {return Some((c - b'0') as u32)};
            if part == 1 {return None};
            words.iter().position(|word| rest.starts_with(word)).map(|val| val as u32)
        };
        let first = (0 .. line.len()).find_map(digit_at).expect(line);
        let last = (0 .. line.len()).rev().find_map(digit_at).expect(line);
        first * 10 + last
    }).sum::<u32>().to_string()
}

fn day2(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let (game, draws) = line.split_once(": ").expect(line);
        let id: u32 = game.strip_prefix("Game ").expect(line).parse().expect(line);
        let mut max = [0u32; 3];
        for entry in draws.split([';', ',']) {
            let (amount, color) = entry.trim().split_once(' ').expect(line);
            let amount: u32 = amount.parse().expect(line);
            let ci = match color {
                "red" => 0, "green" => 1, "blue" => 2,
                _ => panic!("unexpected color in {}", line)
            };
            max[ci] = max[ci].max(amount);
        }
        if part == 1 {
            if max[0] <= 12 && max[1] <= 13 && max[2] <= 14 {id} else {0}
        } else {
            max.iter().product()
        }
    }).sum::<u32>().to_string()
}

fn day3(part: u8, input: &str) -> String {
    let grid = input.trim().lines().map(|line| line.as_bytes()).collect::<Vec<_>>();
    let mut part_sum = 0u64;
    let mut gears: FxHashMap<(usize, usize), Vec<u64>> = FxHashMap::default();
    for (y, row) in grid.iter().enumerate() {
        let mut x = 0;
        while x < row.len() {
            if !row[x].is_ascii_digit() {x += 1; continue}
            let x0 = x;
            while x < row.len() && row[x].is_ascii_digit() {x += 1}
            let n: u64 = std::str::from_utf8(&row[x0 .. x]).unwrap().parse().unwrap();
            let mut near_symbol = false;
            for ny in y.saturating_sub(1) ..= (y + 1).min(grid.len() - 1) {
                for nx in x0.saturating_sub(1) ..= x.min(grid[ny].len() - 1) {
                    let cell = grid[ny][nx];
                    if cell != b'.' && !cell.is_ascii_digit() {near_symbol = true}
                    if cell == b'*' {gears.entry((nx, ny)).or_default().push(n)}
                }
            }
            if near_symbol {part_sum += n}
        }
    }

    if part == 1 {
        part_sum.to_string()
    } else {
        gears.values().filter(|ns| ns.len() == 2).map(|ns| ns[0] * ns[1]).sum::<u64>().to_string()
    }
}

fn day4(part: u8, input: &str) -> String {
    let matches: Vec<usize> = input.trim().lines().map(|line| {
        let (_, numbers) = line.split_once(": ").expect(line);
        let (winning, own) = numbers.split_once(" | ").expect(line);
        let mut is_winning = bitarr![0; 100];
        for n in winning.split_whitespace() {
            is_winning.set(n.parse::<usize>().expect(line), true);
        }
        own.split_whitespace().filter(|n| is_winning[n.parse::<usize>().expect(line)]).count()
    }).collect();

    if part == 1 {
        matches.iter().map(|&m| if m == 0 {0} else {1u64 << (m - 1)}).sum::<u64>().to_string()
    } else {
        let mut copies = vec![1u64; matches.len()];
        for i in 0 .. matches.len() {
            for d in 1 ..= matches[i] {
                copies[i + d] += copies[i];
            }
        }
        copies.iter().sum::<u64>().to_string()
    }
}

fn day5(part: u8, input: &str) -> String {
    let (seed_line, rest) = input.trim().split_once("\n\n").expect("missing seed list");
    let seeds: Vec<i64> = seed_line.strip_prefix("seeds:").expect(seed_line)
        .split_whitespace().map(|n| n.parse().expect(n)).collect();
    let tables: Vec<Table> = rest.split("\n\n").map(|block|
        Table::new(block.lines().skip(1).map(|line| {
            let [dest, src, len] = line.split_whitespace()
                .map(|n| n.parse().expect(n)).collect::<Vec<i64>>()[..] else {
                panic!("cannot parse rule {}", line)
            };
            Rule::from_endpoints(dest, src, len)
        }).collect())
    ).collect();

    let seeds = if part == 1 {
        IntervalSet::from_points(&seeds)
    } else {
        IntervalSet::new(seeds.chunks(2).map(|pair| Interval::new(pair[0], pair[0] + pair[1])).collect())
    };
    apply_chain(&tables, seeds).min_value().expect("no intervals left after the chain").to_string()
}

fn day6(part: u8, input: &str) -> String {
    let mut rows = input.trim().lines().map(|line| {
        let (_, fields) = line.split_once(':').expect(line);
        if part == 1 {
            fields.split_whitespace().map(|n| n.parse::<u64>().expect(n)).collect::<Vec<_>>()
        } else {
            vec![fields.split_whitespace().collect::<String>().parse().expect(line)]
        }
    });
    let times = rows.next().expect("missing Time line");
    let dists = rows.next().expect("missing Distance line");
    zip(times, dists).map(|(t, d)| {
        // dist = press * (t - press); the winning presses are the integers
        // strictly between the roots of press^2 - t*press + d
        let delta = ((t * t - 4 * d) as f64).sqrt();
        let lo = ((t as f64 - delta) / 2.0 + 1.0).floor() as u64;
        let hi = ((t as f64 + delta) / 2.0 - 1.0).ceil() as u64;
        hi - lo + 1
    }).product::<u64>().to_string()
}

fn day7(part: u8, input: &str) -> String {
    let order = if part == 1 {"23456789TJQKA"} else {"J23456789TQKA"};
    let mut hands: Vec<(u8, u64, u64)> = input.trim().lines().map(|line| {
        let (hand, bid) = line.split_once(' ').expect(line);
        let cards: ArrayVec<u8, 5> = hand.chars()
            .map(|c| order.find(c).expect(line) as u8).collect();
        let mut counts = [0u8; 13];
        let mut jokers = 0;
        for &card in &cards {
            if part == 2 && card == 0 {jokers += 1} else {counts[card as usize] += 1}
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let kind = match (counts[0] + jokers, counts[1]) {
            (5, _) => 6, (4, _) => 5, (3, 2) => 4, (3, _) => 3,
            (2, 2) => 2, (2, _) => 1, _ => 0
        };
        let val = cards.iter().fold(0u64, |acc, &card| acc * 13 + card as u64);
        (kind, val, bid.parse().expect(line))
    }).collect();
    hands.sort_unstable();
    hands.iter().zip(1..).map(|(&(_, _, bid), rank)| bid * rank).sum::<u64>().to_string()
}

fn day8(part: u8, input: &str) -> String {
    let (instructions, node_lines) = input.trim().split_once("\n\n").expect("missing node list");
    let re = Regex::new(r"(\w+) = \((\w+), (\w+)\)").unwrap();
    let nodes: FxHashMap<&str, (&str, &str)> = node_lines.lines().map(|line| {
        let m = re.captures(line).expect(line);
        let [node, left, right] = [1, 2, 3].map(|i| m.get(i).unwrap().as_str());
        (node, (left, right))
    }).collect();

    let steps_to_end = |start: &str, is_end: fn(&str) -> bool| -> u64 {
        let mut cur = start;
        for (n, instr) in zip(1.., instructions.chars().cycle()) {
            let (left, right) = nodes[cur];
            cur = if instr == 'L' {left} else {right};
            if is_end(cur) {return n}
        }
        unreachable!()
    };

    if part == 1 {
        steps_to_end("AAA", |node| node == "ZZZ").to_string()
    } else {
        // each ghost revisits its Z node with the distance to the first visit
        // as the period, so the walks first align at the least common multiple
        nodes.keys().filter(|node| node.ends_with('A'))
            .map(|&start| steps_to_end(start, |node| node.ends_with('Z')))
            .fold(1, lcm).to_string()
    }
}

fn day9(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let mut seq: Vec<i64> = line.split_whitespace().map(|n| n.parse().expect(n)).collect();
        if part == 2 {seq.reverse()}
        let mut total = 0;
        while seq.iter().any(|&n| n != 0) {
            total += *seq.last().unwrap();
            seq = seq.iter().tuple_windows().map(|(a, b)| b - a).collect();
        }
        total
    }).sum::<i64>().to_string()
}

fn pipe_exits(tile: u8) -> Option<[(i32, i32); 2]> {
    match tile {
        b'|' => Some([(0, -1), (0, 1)]),
        b'-' => Some([(-1, 0), (1, 0)]),
        b'L' => Some([(0, -1), (1, 0)]),
        b'J' => Some([(0, -1), (-1, 0)]),
        b'7' => Some([(0, 1), (-1, 0)]),
        b'F' => Some([(0, 1), (1, 0)]),
        _ => None
    }
}

fn day10(part: u8, input: &str) -> String {
    let grid = input.trim().lines().map(|line| line.as_bytes()).collect::<Vec<_>>();
    let at = |x: i32, y: i32| -> u8 {
        if x < 0 || y < 0 {return b'.'}
        *grid.get(y as usize).and_then(|row| row.get(x as usize)).unwrap_or(&b'.')
    };
    let (sx, sy) = (0 .. grid.len()).find_map(|y|
        grid[y].iter().position(|&c| c == b'S').map(|x| (x as i32, y as i32))
    ).expect("no start tile");
    let start_dirs: Vec<(i32, i32)> = [(0, -1), (-1, 0), (1, 0), (0, 1)].into_iter()
        .filter(|&(dx, dy)|
            pipe_exits(at(sx + dx, sy + dy)).is_some_and(|exits| exits.contains(&(-dx, -dy)))
        ).collect();
    let [da, db] = start_dirs[..] else {
        panic!("expected exactly two pipes connecting to the start tile")
    };

    let mut on_loop = vec![vec![false; grid[0].len()]; grid.len()];
    on_loop[sy as usize][sx as usize] = true;
    let (mut x, mut y, mut dir) = (sx + da.0, sy + da.1, da);
    let mut steps = 1u32;
    while (x, y) != (sx, sy) {
        on_loop[y as usize][x as usize] = true;
        let exits = pipe_exits(at(x, y)).expect("walked off the loop");
        dir = if exits[0] == (-dir.0, -dir.1) {exits[1]} else {exits[0]};
        x += dir.0;
        y += dir.1;
        steps += 1;
    }

    if part == 1 {return (steps / 2).to_string()}

    // the scanline below needs to know which pipe the start tile stands for
    let s_tile = [b'|', b'-', b'L', b'J', b'7', b'F'].into_iter().find(|&tile| {
        let exits = pipe_exits(tile).unwrap();
        exits.contains(&da) && exits.contains(&db)
    }).expect("start tile connects nowhere");

    let mut inside_count = 0u32;
    for (y, row) in grid.iter().enumerate() {
        let mut inside = false;
        for (x, &cell) in row.iter().enumerate() {
            let cell = if cell == b'S' {s_tile} else {cell};
            if on_loop[y][x] {
                if matches!(cell, b'|' | b'L' | b'J') {inside = !inside}
            } else if inside {
                inside_count += 1;
            }
        }
    }
    inside_count.to_string()
}

fn day11(part: u8, input: &str) -> String {
    galaxy_distances(input, if part == 1 {2} else {1_000_000}).to_string()
}

fn galaxy_distances(input: &str, factor: i64) -> i64 {
    let grid = input.trim().lines().map(|line| line.as_bytes()).collect::<Vec<_>>();
    let empty_row: Vec<bool> = grid.iter().map(|row| row.iter().all(|&c| c != b'#')).collect();
    let empty_col: Vec<bool> = (0 .. grid[0].len())
        .map(|x| grid.iter().all(|row| row[x] != b'#')).collect();
    let (empty_row, empty_col) = (&empty_row, &empty_col);
    let galaxies: Vec<(i64, i64)> = grid.iter().enumerate().flat_map(|(y, row)|
        row.iter().enumerate().filter(|&(_, &c)| c == b'#').map(move |(x, _)| {
            let expand_x = empty_col[.. x].iter().filter(|&&e| e).count() as i64;
            let expand_y = empty_row[.. y].iter().filter(|&&e| e).count() as i64;
            (x as i64 + (factor - 1) * expand_x, y as i64 + (factor - 1) * expand_y)
        })
    ).collect();
    galaxies.iter().tuple_combinations()
        .map(|(a, b)| (a.0 - b.0).abs() + (a.1 - b.1).abs()).sum()
}

fn count_arrangements(conf: &[u8], counts: &[usize], memo: &mut FxHashMap<(usize, usize), u64>) -> u64 {
    if counts.is_empty() {
        return if conf.contains(&b'#') {0} else {1};
    }
    if conf.len() < counts.iter().sum::<usize>() + counts.len() - 1 {return 0}
    if let Some(&res) = memo.get(&(conf.len(), counts.len())) {return res}

    let mut res = 0;
    // a group of springs starting here
    let n = counts[0];
    if !conf[.. n].contains(&b'.') && conf.get(n) != Some(&b'#') {
        let rest = if n + 1 <= conf.len() {&conf[n + 1 ..]} else {&[]};
        res += count_arrangements(rest, &counts[1 ..], memo);
    }
    // or an operational cell here
    if conf[0] != b'#' {
        res += count_arrangements(&conf[1 ..], counts, memo);
    }
    memo.insert((conf.len(), counts.len()), res);
    res
}

fn day12(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let (conf, counts) = line.split_once(' ').expect(line);
        let (conf, counts) = if part == 1 {
            (conf.to_owned(), counts.to_owned())
        } else {
            ([conf; 5].join("?"), [counts; 5].join(","))
        };
        let counts: Vec<usize> = counts.split(',').map(|n| n.parse().expect(line)).collect();
        count_arrangements(conf.as_bytes(), &counts, &mut FxHashMap::default())
    }).sum::<u64>().to_string()
}

fn day13(part: u8, input: &str) -> String {
    let target = if part == 1 {0} else {1};
    input.trim().split("\n\n").map(|block| {
        let grid = block.lines().map(|line| line.as_bytes()).collect::<Vec<_>>();
        let h = grid.len();
        let w = grid[0].len();
        let horizontal = (1 .. h).find(|&i|
            (0 .. i.min(h - i)).map(|d|
                zip(grid[i - 1 - d], grid[i + d]).filter(|(a, b)| a != b).count()
            ).sum::<usize>() == target
        );
        if let Some(i) = horizontal {return 100 * i}
        (1 .. w).find(|&i|
            (0 .. i.min(w - i)).map(|d|
                (0 .. h).filter(|&y| grid[y][i - 1 - d] != grid[y][i + d]).count()
            ).sum::<usize>() == target
        ).expect("no mirror line found")
    }).sum::<usize>().to_string()
}

fn slide(grid: &mut Vec<Vec<u8>>, dx: i32, dy: i32) {
    let h = grid.len() as i32;
    let w = grid[0].len() as i32;
    // visit destination cells before the rocks that roll into them
    let ys: Vec<i32> = if dy > 0 {(0 .. h).rev().collect()} else {(0 .. h).collect()};
    let xs: Vec<i32> = if dx > 0 {(0 .. w).rev().collect()} else {(0 .. w).collect()};
    for &y in &ys {
        for &x in &xs {
            if grid[y as usize][x as usize] != b'O' {continue}
            let (mut nx, mut ny) = (x, y);
            while (0 .. w).contains(&(nx + dx)) && (0 .. h).contains(&(ny + dy))
                && grid[(ny + dy) as usize][(nx + dx) as usize] == b'.' {
                nx += dx;
                ny += dy;
            }
            grid[y as usize][x as usize] = b'.';
            grid[ny as usize][nx as usize] = b'O';
        }
    }
}

fn spin_cycle(grid: &mut Vec<Vec<u8>>) {
    slide(grid, 0, -1);
    slide(grid, -1, 0);
    slide(grid, 0, 1);
    slide(grid, 1, 0);
}

fn north_load(grid: &[Vec<u8>]) -> usize {
    grid.iter().enumerate().map(|(y, row)|
        row.iter().filter(|&&c| c == b'O').count() * (grid.len() - y)
    ).sum()
}

fn day14(part: u8, input: &str) -> String {
    let mut grid: Vec<Vec<u8>> = input.trim().lines().map(|line| line.as_bytes().to_vec()).collect();
    if part == 1 {
        slide(&mut grid, 0, -1);
        return north_load(&grid).to_string();
    }

    let limit = 1_000_000_000u64;
    let mut seen = FxHashMap::default();
    let mut i = 0;
    while i < limit {
        spin_cycle(&mut grid);
        i += 1;
        if let Some(prev) = seen.insert(grid.clone(), i) {
            // fast-forward whole cycles, then walk the remainder
            let cycle_len = i - prev;
            i += (limit - i) / cycle_len * cycle_len;
        }
    }
    north_load(&grid).to_string()
}

fn day15(part: u8, input: &str) -> String {
    let hash = |s: &str| s.bytes().fold(0usize, |acc, b| (acc + b as usize) * 17 % 256);
    if part == 1 {
        input.trim().split(',').map(|instr| hash(instr)).sum::<usize>().to_string()
    } else {
        let mut boxes: Vec<Vec<(&str, usize)>> = vec![vec![]; 256];
        for instr in input.trim().split(',') {
            if let Some(label) = instr.strip_suffix('-') {
                boxes[hash(label)].retain(|&(l, _)| l != label);
            } else {
                let (label, focal) = instr.split_once('=').expect(instr);
                let focal = focal.parse().expect(instr);
                let lenses = &mut boxes[hash(label)];
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, f)) => *f = focal,
                    None => lenses.push((label, focal))
                }
            }
        }
        boxes.iter().zip(1..).flat_map(|(lenses, box_nr)|
            lenses.iter().zip(1..).map(move |(&(_, focal), slot_nr)| box_nr * slot_nr * focal)
        ).sum::<usize>().to_string()
    }
}

fn day18(part: u8, input: &str) -> String {
    let re = Regex::new(r"([URDL]) (\d+) \(#([0-9a-f]{6})\)").unwrap();
    let (mut x, mut y) = (0i64, 0i64);
    let mut area2 = 0i64;
    let mut perimeter = 0i64;
    for line in input.trim().lines() {
        let m = re.captures(line).expect(line);
        let (dir, amount) = if part == 1 {
            (m[1].as_bytes()[0], m[2].parse::<i64>().expect(line))
        } else {
            (b"RDLU"[m[3][5 ..].parse::<usize>().expect(line)],
             i64::from_str_radix(&m[3][.. 5], 16).expect(line))
        };
        let (dx, dy) = match dir {
            b'U' => (0, -1), b'D' => (0, 1), b'L' => (-1, 0), b'R' => (1, 0),
            _ => panic!("unexpected direction in {}", line)
        };
        let (nx, ny) = (x + dx * amount, y + dy * amount);
        area2 += x * ny - nx * y;
        perimeter += amount;
        (x, y) = (nx, ny);
    }
    // shoelace gives the interior of the center-line polygon; Pick's theorem
    // recovers the trench cells on top of that
    (area2.abs() / 2 + perimeter / 2 + 1).to_string()
}

fn day19(part: u8, input: &str) -> String {
    let (workflow_lines, part_lines) = input.trim().split_once("\n\n").expect("missing part list");
    let axis_of = |c: u8| b"xmas".iter().position(|&a| a == c).expect("unexpected category");
    let workflows: FxHashMap<&str, Vec<(Option<(usize, u8, i64)>, &str)>> =
        workflow_lines.lines().map(|line| {
            let (name, rest) = line.split_once('{').expect(line);
            let rules = rest.strip_suffix('}').expect(line).split(',').map(|instr|
                match instr.split_once(':') {
                    None => (None, instr),
                    Some((cond, target)) => {
                        let b = cond.as_bytes();
                        (Some((axis_of(b[0]), b[1], cond[2 ..].parse().expect(line))), target)
                    }
                }
            ).collect();
            (name, rules)
        }).collect();

    if part == 1 {
        part_lines.lines().map(|line| {
            let vals: Vec<i64> = line.trim_matches(['{', '}'])
                .split(',').map(|field| field[2 ..].parse().expect(line)).collect();
            let mut name = "in";
            loop {
                if name == "A" {return vals.iter().sum::<i64>()}
                if name == "R" {return 0}
                name = workflows[name].iter().find_map(|&(cond, target)| {
                    let taken = match cond {
                        None => true,
                        Some((axis, b'<', val)) => vals[axis] < val,
                        Some((axis, b'>', val)) => vals[axis] > val,
                        Some(_) => panic!("unexpected comparison in {}", line)
                    };
                    taken.then_some(target)
                }).expect("workflow fell through");
            }
        }).sum::<i64>().to_string()
    } else {
        let mut total = 0i64;
        let mut stack = vec![("in", 0usize, [Interval::new(1, 4001); 4])];
        while let Some((name, rule_i, mut cube)) = stack.pop() {
            if name == "R" || cube.iter().any(|iv| iv.is_empty()) {continue}
            if name == "A" {
                total += cube.iter().map(|iv| iv.len()).product::<i64>();
                continue;
            }
            let (cond, target) = workflows[name][rule_i];
            match cond {
                None => stack.push((target, 0, cube)),
                Some((axis, op, val)) => {
                    let at = if op == b'<' {val} else {val + 1};
                    let (below, above) = cube[axis].split_at(at);
                    let (taken, kept) = if op == b'<' {(below, above)} else {(above, below)};
                    let mut taken_cube = cube;
                    taken_cube[axis] = taken;
                    stack.push((target, 0, taken_cube));
                    cube[axis] = kept;
                    stack.push((name, rule_i + 1, cube));
                }
            }
        }
        total.to_string()
    }
}

fn day20(part: u8, input: &str) -> String {
    let mut kinds: FxHashMap<&str, u8> = FxHashMap::default();
    let mut outputs: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for line in input.trim().lines() {
        let (lhs, rhs) = line.split_once(" -> ").expect(line);
        let (kind, name) = match lhs.as_bytes()[0] {
            b'%' => (b'%', &lhs[1 ..]),
            b'&' => (b'&', &lhs[1 ..]),
            _ => (b'b', lhs)
        };
        kinds.insert(name, kind);
        outputs.insert(name, rhs.split(", ").collect());
    }
    let mut flip_state: FxHashMap<&str, bool> = FxHashMap::default();
    let mut conj_memory: FxHashMap<&str, FxHashMap<&str, bool>> = FxHashMap::default();
    for (&name, outs) in &outputs {
        for &out in outs {
            if kinds.get(out) == Some(&b'&') {
                conj_memory.entry(out).or_default().insert(name, false);
            }
        }
    }

    // rx only ever hears from one conjunction; each of that conjunction's
    // inputs goes high with a fixed period, and rx goes low when they line up
    let rx_feeder = outputs.iter().find_map(|(&name, outs)| outs.contains(&"rx").then_some(name));
    let mut feeder_periods: FxHashMap<&str, u64> = FxHashMap::default();

    let (mut low_total, mut high_total) = (0u64, 0u64);
    let mut queue = VecDeque::new();
    for press in 1u64 .. {
        if part == 1 && press > 1000 {break}
        queue.push_back(("button", "broadcaster", false));
        while let Some((from, to, pulse)) = queue.pop_front() {
            if pulse {high_total += 1} else {low_total += 1}
            if part == 2 && pulse && Some(to) == rx_feeder {
                feeder_periods.entry(from).or_insert(press);
            }
            let Some(&kind) = kinds.get(to) else {continue};
            let send = match kind {
                b'b' => pulse,
                b'%' => {
                    if pulse {continue}
                    let state = flip_state.entry(to).or_insert(false);
                    *state = !*state;
                    *state
                },
                b'&' => {
                    let memory = conj_memory.get_mut(to).unwrap();
                    memory.insert(from, pulse);
                    !memory.values().all(|&p| p)
                },
                _ => unreachable!()
            };
            for &out in &outputs[to] {
                queue.push_back((to, out, send));
            }
        }
        if part == 2 {
            let feeder = rx_feeder.expect("no module feeds rx");
            if feeder_periods.len() == conj_memory[feeder].len() {
                return feeder_periods.values().fold(1, |acc, &p| lcm(acc, p)).to_string();
            }
        }
    }
    (low_total * high_total).to_string()
}

fn parse_stones(input: &str) -> Vec<Vec<f64>> {
    input.trim().lines().map(|line|
        line.split([',', '@']).map(|n| n.trim().parse().expect(line)).collect()
    ).collect()
}

fn count_crossings(stones: &[Vec<f64>], lo: f64, hi: f64) -> usize {
    stones.iter().tuple_combinations().filter(|(a, b)| {
        let [xa, ya, _, vxa, vya, _] = a[..] else {panic!("expected six fields")};
        let [xb, yb, _, vxb, vyb, _] = b[..] else {panic!("expected six fields")};
        // ta, tb solve (xa, ya) + ta (vxa, vya) = (xb, yb) + tb (vxb, vyb)
        let det = vxa * -vyb + vxb * vya;
        if det == 0.0 {return false}
        let ta = ((xb - xa) * -vyb + vxb * (yb - ya)) / det;
        let tb = (vxa * (yb - ya) - vya * (xb - xa)) / det;
        let (xi, yi) = (xa + ta * vxa, ya + ta * vya);
        ta >= 0.0 && tb >= 0.0 && (lo ..= hi).contains(&xi) && (lo ..= hi).contains(&yi)
    }).count()
}

fn day24(part: u8, input: &str) -> String {
    assert!(part == 1, "part 2 not solved");
    count_crossings(&parse_stones(input), 200_000_000_000_000.0, 400_000_000_000_000.0).to_string()
}

fn bfs_path(adj: &[Vec<usize>], cap: &FxHashMap<(usize, usize), i32>,
            from: usize, to: usize) -> Option<Vec<usize>> {
    let mut prev = vec![usize::MAX; adj.len()];
    prev[from] = from;
    let mut queue = VecDeque::from([from]);
    while let Some(u) = queue.pop_front() {
        if u == to {
            let mut path = vec![u];
            let mut cur = u;
            while cur != from {
                cur = prev[cur];
                path.push(cur);
            }
            path.reverse();
            return Some(path);
        }
        for &v in &adj[u] {
            if prev[v] == usize::MAX && cap[&(u, v)] > 0 {
                prev[v] = u;
                queue.push_back(v);
            }
        }
    }
    None
}

fn day25(part: u8, input: &str) -> String {
    assert!(part == 1, "day 25 has no part 2");
    let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
    let mut edges = vec![];
    for line in input.trim().lines() {
        let (from, tos) = line.split_once(": ").expect(line);
        for to in tos.split_whitespace() {
            let [u, v] = [from, to].map(|name| {
                let next = ids.len();
                *ids.entry(name).or_insert(next)
            });
            edges.push((u, v));
        }
    }
    let n = ids.len();
    let mut adj = vec![vec![]; n];
    let mut full_cap: FxHashMap<(usize, usize), i32> = FxHashMap::default();
    for &(u, v) in &edges {
        adj[u].push(v);
        adj[v].push(u);
        full_cap.insert((u, v), 1);
        full_cap.insert((v, u), 1);
    }

    // nodes far from node 0 tend to sit across the three-wire cut; try them first
    let order = {
        let mut seen = vec![false; n];
        seen[0] = true;
        let mut queue = VecDeque::from([0]);
        let mut order = vec![];
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        order
    };

    'sinks: for &sink in order.iter().rev() {
        if sink == 0 {break}
        let mut cap = full_cap.clone();
        for _ in 0 .. 3 {
            let Some(path) = bfs_path(&adj, &cap, 0, sink) else {continue 'sinks};
            for (&u, &v) in path.iter().tuple_windows() {
                *cap.get_mut(&(u, v)).unwrap() -= 1;
                *cap.get_mut(&(v, u)).unwrap() += 1;
            }
        }
        if bfs_path(&adj, &cap, 0, sink).is_some() {continue}  // same side of the cut

        // residual reachability from node 0 is exactly one side
        let mut seen = vec![false; n];
        seen[0] = true;
        let mut queue = VecDeque::from([0]);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if !seen[v] && cap[&(u, v)] > 0 {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        let cluster = seen.iter().filter(|&&s| s).count();
        return (cluster * (n - cluster)).to_string();
    }
    panic!("no three-wire cut found");
}

fn unsolved(_part: u8, _input: &str) -> String {
    panic!("day not solved")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let days = [
        day1, day2, day3, day4, day5, day6, day7, day8, day9, day10, day11, day12, day13,
        day14, day15, unsolved, unsolved, day18, day19, day20, unsolved, unsolved, unsolved,
        day24, day25
    ];

    let args = std::env::args().collect::<Vec<_>>();
    let (day_arg, part_arg, fname) = match &args[..] {
        [_, day_arg, part_arg] => (day_arg, part_arg, format!("day{}.in", day_arg)),
        [_, day_arg, test_arg, part_arg] => (day_arg, part_arg, format!("day{}test{}.in", day_arg, test_arg)),
        _ => {
            println!("exactly two or three arguments expected - day number, optionally test number and 1/2 for part");
            std::process::exit(1);
        }
    };

    assert!(part_arg == "1" || part_arg == "2");
    let day: usize = day_arg.parse()?;
    let input = std::fs::read_to_string(fname)?;
    let time = std::time::Instant::now();
    println!("{}", days[day - 1](part_arg.parse()?, &input));
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
