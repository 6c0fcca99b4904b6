/// Number of elements in the fixture.
pub const LEN: usize = 7;

/// Input every routine is run against. Each test works on its own copy.
pub const INPUT: [i32; LEN] = [64, 34, 25, 12, 22, 11, 90];

/// `INPUT` in ascending order.
pub const EXPECTED: [i32; LEN] = [11, 12, 22, 25, 34, 64, 90];
