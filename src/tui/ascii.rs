// header logo

pub const LOGO: &[&str] = &[
    r" ___ _  _ ___ ___  ___  ___ _____ ",
    r"/ __| || | _ \ _ \/ _ \| _ \_   _|",
    r"\__ \ || |  _/  _/ (_) |   / | |  ",
    r"|___/\__/|_| |_|  \___/|_|_\ |_|  ",
];
