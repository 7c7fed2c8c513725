pub struct TestProject {
    pub border: &'static str,
    pub pillars: &'static str,
}

/// 40x40 border with two 6x6 square pillars.
pub const MINE_LAYOUT: TestProject = TestProject {
    border: include_str!("../res/mine-layout/border.txt"),
    pillars: include_str!("../res/mine-layout/pillars.txt"),
};
