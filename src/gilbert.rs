// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Gilbert curve: a generalized Hilbert curve for arbitrary rectangles.
//!
//! The rectangle is described by an origin and two axis vectors, `a` along
//! the major (longer) side and `b` across it. Blocks are split until they
//! are one cell thick, then walked in a straight line. Subdivision uses an
//! explicit work stack instead of recursion.

/// One pending sub-rectangle.
#[derive(Debug, Clone, Copy)]
struct Block {
    x: i64,
    y: i64,
    ax: i64,
    ay: i64,
    bx: i64,
    by: i64,
}

impl Block {
    /// Walk this block if it is one cell thick, otherwise push its
    /// children onto `stack` so they pop in curve order.
    fn split(self, curve: &mut Vec<(usize, usize)>, stack: &mut Vec<Block>) {
        let Block {
            x,
            y,
            ax,
            ay,
            bx,
            by,
        } = self;

        let w = (ax + ay).abs();
        let h = (bx + by).abs();

        let (dax, day) = (ax.signum(), ay.signum());
        let (dbx, dby) = (bx.signum(), by.signum());

        if h == 1 {
            walk(curve, x, y, dax, day, w);
            return;
        }
        if w == 1 {
            walk(curve, x, y, dbx, dby, h);
            return;
        }

        let (mut ax2, mut ay2) = (ax.div_euclid(2), ay.div_euclid(2));
        let (mut bx2, mut by2) = (bx.div_euclid(2), by.div_euclid(2));

        let w2 = (ax2 + ay2).abs();
        let h2 = (bx2 + by2).abs();

        if 2 * w > 3 * h {
            // Long block: two halves side by side.
            if w2 % 2 == 1 && w > 2 {
                ax2 += dax;
                ay2 += day;
            }

            stack.push(Block {
                x: x + ax2,
                y: y + ay2,
                ax: ax - ax2,
                ay: ay - ay2,
                bx,
                by,
            });
            stack.push(Block {
                x,
                y,
                ax: ax2,
                ay: ay2,
                bx,
                by,
            });
        } else {
            // Up, across, down.
            if h2 % 2 == 1 && h > 2 {
                bx2 += dbx;
                by2 += dby;
            }

            stack.push(Block {
                x: x + (ax - dax) + (bx2 - dbx),
                y: y + (ay - day) + (by2 - dby),
                ax: -bx2,
                ay: -by2,
                bx: -(ax - ax2),
                by: -(ay - ay2),
            });
            stack.push(Block {
                x: x + bx2,
                y: y + by2,
                ax,
                ay,
                bx: bx - bx2,
                by: by - by2,
            });
            stack.push(Block {
                x,
                y,
                ax: bx2,
                ay: by2,
                bx: ax2,
                by: ay2,
            });
        }
    }
}

fn walk(curve: &mut Vec<(usize, usize)>, mut x: i64, mut y: i64, dx: i64, dy: i64, len: i64) {
    for _ in 0..len {
        curve.push((x as usize, y as usize));
        x += dx;
        y += dy;
    }
}

/// Every cell of a `width` x `height` grid as `(x, y)`, in Gilbert curve
/// order.
///
/// The curve starts at `(0, 0)` and visits each cell exactly once.
/// Consecutive cells are neighbours; on some odd/even size combinations a
/// single step is diagonal.
pub fn gilbert_curve(width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut curve = Vec::with_capacity(width * height);
    if width == 0 || height == 0 {
        return curve;
    }

    let (w, h) = (width as i64, height as i64);
    let root = if width >= height {
        Block {
            x: 0,
            y: 0,
            ax: w,
            ay: 0,
            bx: 0,
            by: h,
        }
    } else {
        Block {
            x: 0,
            y: 0,
            ax: 0,
            ay: h,
            bx: w,
            by: 0,
        }
    };

    let mut stack = vec![root];
    while let Some(block) = stack.pop() {
        block.split(&mut curve, &mut stack);
    }

    debug_assert_eq!(curve.len(), width * height);
    curve
}
