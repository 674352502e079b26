// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::{collections::HashMap, fmt::Display, ops::Range};


/// Disks this small (in blocks) are legible enough to print.
const RENDER_LIMIT: usize = 100;


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) enum Block { File(usize), Free }

impl Block {
	fn is_free(&self) -> bool {
		matches!(self, Block::Free)
	}

	fn file_id(&self) -> Option<usize> {
		match *self { Block::File(id) => Some(id), Block::Free => None }
	}
}

impl Display for Block {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Block::File(id) => write!(f, "{id}"),
			Block::Free => f.write_str("."),
		}
	}
}


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Interval {
	range: Range<usize>,
	occupant: Block,
}

impl Interval {
	fn len(&self) -> usize {
		self.range.len()
	}
}


// Naive compaction is only exercised by tests
#[cfg_attr(not(test), allow(dead_code))]
trait Disk: AsRef<[Block]> {
	fn render(&self) -> String {
		use itertools::Itertools as _;
		self.as_ref().iter().join("")
	}

	fn checksum(&self) -> u64 {
		self.as_ref().iter()
			.enumerate()
			.filter_map(|(i, block)| block.file_id().map(|id| (i * id) as u64))
			.sum()
	}

	/// Start of the leftmost run of at least `size` free blocks, not
	/// looking before `start`.
	fn leftmost_free_index(&self, start: usize, size: usize) -> Option<usize> {
		let blocks = self.as_ref();
		let mut run_start = start;
		for i in start..blocks.len() {
			if !blocks[i].is_free() {
				run_start = i + 1;
			} else if i + 1 - run_start >= size {
				return Some(run_start)
			}
		}
		None
	}

	/// Length of the run of identical blocks ending at `last`.
	fn file_extent(&self, last: usize) -> usize {
		let blocks = self.as_ref();
		blocks[..=last].iter().rev()
			.take_while(|&&b| b == blocks[last])
			.count()
	}

	fn file_extents(&self) -> HashMap<usize, usize> {
		self.intervals()
			.filter_map(|i| i.occupant.file_id().map(|id| (id, i.len())))
			.collect()
	}

	/// Maximal runs of identical blocks, in order.
	fn intervals(&self) -> Box<dyn Iterator<Item = Interval> + '_> {
		let blocks = self.as_ref();
		let mut start = 0;
		Box::new(std::iter::from_fn(move || {
			let &occupant = blocks.get(start)?;
			let len = blocks[start..].iter().take_while(|&&b| b == occupant).count();
			let range = start..start + len;
			start += len;
			Some(Interval { range, occupant })
		}))
	}

	fn compacted_fragmenting(&self) -> Vec<Block> {
		let mut blocks = self.as_ref().to_vec();
		let (mut free, mut occupied) = (0, blocks.len());
		loop {
			while free < occupied && !blocks[free].is_free() { free += 1 }
			while occupied > free && blocks[occupied - 1].is_free() { occupied -= 1 }
			if free + 1 >= occupied { break }
			blocks.swap(free, occupied - 1);
		}
		blocks
	}

	fn compacted_whole_files(&self) -> Vec<Block> {
		use itertools::Itertools as _;

		let (mut files, mut frees): (Vec<_>, Vec<_>) = self.intervals()
			.partition(|i| !i.occupant.is_free());

		// Appended (vacated) free intervals always lie right of every
		// file not yet processed, so the scan can stop at the first one
		// starting at or beyond the file.
		let mut placed = Vec::with_capacity(files.len());
		while let Some(mut file) = files.pop() {
			let len = file.len();
			let found = frees.iter()
				.take_while(|free| free.range.start < file.range.start)
				.position(|free| free.len() >= len);
			if let Some(idx) = found {
				let free_start = frees[idx].range.start;
				frees.push(Interval { range: file.range.clone(), occupant: Block::Free });
				file.range = free_start..free_start + len;
				if frees[idx].len() == len {
					frees.remove(idx);
				} else {
					frees[idx].range.start += len;
				}
			}
			placed.push(file);
		}

		placed.into_iter()
			.chain(frees)
			.sorted_by_key(|i| i.range.start)
			.flat_map(|i| std::iter::repeat(i.occupant).take(i.len()))
			.collect()
	}

	/// Same result as [`Disk::compacted_whole_files`], rescanning the
	/// blocks for every file.
	fn compacted_whole_files_naive(&self) -> Vec<Block> {
		let mut blocks = self.as_ref().to_vec();
		let mut next_id = usize::MAX;
		let mut last = blocks.len();
		while last > 0 {
			let id = match blocks[last - 1] {
				Block::Free => { last -= 1; continue }
				Block::File(id) => id,
			};
			let extent = blocks.file_extent(last - 1);
			let file_start = last - extent;
			last = file_start;
			// Already moved here from further right
			if id > next_id { continue }
			next_id = id;

			let Some(free) = blocks.leftmost_free_index(0, extent) else { continue };
			if free >= file_start { continue }
			blocks[free..free + extent].fill(Block::File(id));
			blocks[file_start..file_start + extent].fill(Block::Free);
		}
		blocks
	}
}

impl Disk for Vec<Block> {}


fn input_disk_from_str(s: &str) -> Vec<Block> {
	parsing::try_disk_from_str(s).unwrap()
}


fn part1_impl(input_disk: impl Disk) -> u64 {
	input_disk.compacted_fragmenting().checksum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_disk_from_str(input))
}


fn part2_impl(input_disk: impl Disk) -> u64 {
	input_disk.compacted_whole_files().checksum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_disk_from_str(input))
}


pub(crate) fn render(input: &str) -> Option<String> {
	let disk = input_disk_from_str(input);
	if disk.len() > RENDER_LIMIT { return None }
	Some(format!("{}\n{}\n{}",
		disk.render(),
		disk.compacted_fragmenting().render(),
		disk.compacted_whole_files().render()))
}


mod parsing {
	use super::Block;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum DiskError {
		Empty,
		Digit { column: usize, found: char },
	}

	pub(super) fn try_disk_from_str(s: &str) -> Result<Vec<Block>, DiskError> {
		let s = s.trim_end_matches(['\n', '\r']);
		if s.is_empty() { return Err(DiskError::Empty) }
		let lens = s.chars()
			.enumerate()
			.map(|(c, chr)| chr.to_digit(10)
				.map(|d| d as usize)
				.ok_or(DiskError::Digit { column: c + 1, found: chr }))
			.collect::<Result<Vec<_>, _>>()?;

		let mut blocks = Vec::with_capacity(lens.iter().sum());
		for (i, &len) in lens.iter().enumerate() {
			let block = if i % 2 == 0 { Block::File(i / 2) } else { Block::Free };
			blocks.extend(std::iter::repeat(block).take(len));
		}
		Ok(blocks)
	}

	#[test]
	fn tests() -> Result<(), DiskError> {
		use Block::*;
		assert_eq!(try_disk_from_str("12\n")?, [File(0), Free, Free]);
		assert_eq!(try_disk_from_str("1021")?, [File(0), File(1), File(1), Free]);
		assert!(try_disk_from_str("0")?.is_empty());
		assert!(matches!(try_disk_from_str(""), Err(DiskError::Empty)));
		assert!(matches!(try_disk_from_str("\n"), Err(DiskError::Empty)));
		assert!(matches!(try_disk_from_str("12x4"),
			Err(DiskError::Digit { column: 3, found: 'x' })));
		assert!(matches!(try_disk_from_str("1 2"),
			Err(DiskError::Digit { column: 2, found: ' ' })));
		Ok(())
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = "2333133121414131402";

	const OTHER_INPUTS: [&str; 5] = ["12345", "90909", "2234", "1313165", "714892711"];

	#[test]
	fn tests() {
		assert_eq!(input_disk_from_str("12345").render(), "0..111....22222");
		assert_eq!(input_disk_from_str(INPUT).render(), "00...111...2...333.44.5555.6666.777.888899");
		assert_eq!(part1_impl(input_disk_from_str(INPUT)), 1928);
		assert_eq!(part2_impl(input_disk_from_str(INPUT)), 2858);
		assert_eq!(part1(INPUT), 1928);
		assert_eq!(part2(INPUT), 2858);
	}

	#[test]
	fn renderings() {
		assert_eq!(render(INPUT).unwrap(), indoc::indoc! { "
			00...111...2...333.44.5555.6666.777.888899
			0099811188827773336446555566..............
			00992111777.44.333....5555.6666.....8888.." }
		);
		assert_eq!(input_disk_from_str("12345").compacted_fragmenting().render(), "022111222......");
		assert!(render(&"9".repeat(23)).is_none());
	}

	#[test]
	fn leftmost_free_index() {
		assert_eq!(input_disk_from_str("15").leftmost_free_index(0, 1), Some(1));
		assert_eq!(input_disk_from_str("15").leftmost_free_index(2, 1), Some(2));
		assert_eq!(input_disk_from_str("12").leftmost_free_index(0, 3), None);
		assert_eq!(input_disk_from_str("15").leftmost_free_index(4, 3), None);
		assert_eq!(input_disk_from_str("2234").leftmost_free_index(0, 3), Some(7));
	}

	#[test]
	fn extents() {
		let disk = input_disk_from_str(INPUT);
		assert_eq!(disk.file_extent(1), 2);
		assert_eq!(disk.file_extent(7), 3);
		assert_eq!(disk.file_extent(41), 2);
		let extents = disk.file_extents();
		assert_eq!(extents.len(), 10);
		assert_eq!(extents[&0], 2);
		assert_eq!(extents[&5], 4);
		assert_eq!(extents[&9], 2);
		assert_eq!(disk.intervals().take(3).collect::<Vec<_>>(), [
			Interval { range: 0..2, occupant: Block::File(0) },
			Interval { range: 2..5, occupant: Block::Free },
			Interval { range: 5..8, occupant: Block::File(1) },
		]);
	}

	#[test]
	fn properties() {
		for input in std::iter::once(INPUT).chain(OTHER_INPUTS) {
			let disk = input_disk_from_str(input);
			let file_len: usize = input.chars().step_by(2).map(|c| c.to_digit(10).unwrap() as usize).sum();
			let occupied = |d: &[Block]| d.iter().filter(|b| !b.is_free()).count();
			assert_eq!(occupied(&disk), file_len);

			let fragmented = disk.compacted_fragmenting();
			assert_eq!(occupied(&fragmented), file_len);
			assert!(fragmented[file_len..].iter().all(Block::is_free));
			assert_eq!(fragmented.compacted_fragmenting(), fragmented);

			let whole = disk.compacted_whole_files();
			assert_eq!(whole.len(), disk.len());
			assert_eq!(whole.file_extents(), disk.file_extents());
			assert_eq!(whole, disk.compacted_whole_files_naive());
		}
		assert_eq!(input_disk_from_str("09").checksum(), 0);
		assert_eq!(input_disk_from_str("09").compacted_whole_files().checksum(), 0);
	}
}
