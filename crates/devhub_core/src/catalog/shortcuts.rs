//! Keyboard shortcut and git command reference tables.

use super::{CommandGroup, ShortcutGroup};

pub const SHORTCUT_GROUPS: &[ShortcutGroup] = &[
    ShortcutGroup {
        title: "VS Code Shortcuts",
        items: &[
            ("Ctrl + Shift + P", "Command Palette"),
            ("Ctrl + `", "Toggle Terminal"),
            ("Ctrl + Shift + `", "New Terminal"),
            ("Ctrl + B", "Toggle Sidebar"),
            ("Ctrl + Shift + E", "Explorer"),
            ("Ctrl + Shift + F", "Search"),
            ("Ctrl + Shift + G", "Source Control"),
            ("Alt + Up/Down", "Move Line"),
            ("Shift + Alt + Up/Down", "Copy Line"),
            ("Ctrl + /", "Toggle Comment"),
        ],
    },
    ShortcutGroup {
        title: "Browser DevTools",
        items: &[
            ("F12", "Open DevTools"),
            ("Ctrl + Shift + I", "Open DevTools"),
            ("Ctrl + Shift + C", "Inspect Element"),
            ("Ctrl + Shift + J", "Console"),
            ("Ctrl + R", "Refresh"),
            ("Ctrl + Shift + R", "Hard Refresh"),
            ("Ctrl + Shift + Delete", "Clear Storage"),
        ],
    },
    ShortcutGroup {
        title: "System Shortcuts",
        items: &[
            ("Ctrl + C", "Copy"),
            ("Ctrl + V", "Paste"),
            ("Ctrl + Z", "Undo"),
            ("Ctrl + Y", "Redo"),
            ("Ctrl + A", "Select All"),
            ("Ctrl + S", "Save"),
            ("Alt + Tab", "Switch Apps"),
        ],
    },
];

pub const GIT_COMMAND_GROUPS: &[CommandGroup] = &[
    CommandGroup {
        title: "Basic Commands",
        commands: &[
            ("git init", "Initialize a new Git repository"),
            ("git clone <url>", "Clone a repository"),
            ("git status", "Check repository status"),
            ("git add .", "Stage all changes"),
            ("git commit -m 'message'", "Commit changes"),
            ("git push", "Push to remote repository"),
            ("git pull", "Pull from remote repository"),
            ("git fetch", "Fetch changes without merging"),
            ("git remote -v", "Show remote repositories"),
        ],
    },
    CommandGroup {
        title: "Branching & Merging",
        commands: &[
            ("git branch", "List all branches"),
            ("git branch <name>", "Create new branch"),
            ("git checkout <branch>", "Switch to branch"),
            ("git checkout -b <name>", "Create and switch to branch"),
            ("git switch <branch>", "Switch to branch (modern)"),
            ("git merge <branch>", "Merge branch into current"),
            ("git branch -d <name>", "Delete merged branch"),
            ("git push origin --delete <branch>", "Delete remote branch"),
        ],
    },
    CommandGroup {
        title: "History & Logs",
        commands: &[
            ("git log", "View commit history"),
            ("git log --oneline", "Compact commit history"),
            ("git log --graph", "Show branch graph"),
            ("git show <commit>", "Show commit details"),
            ("git diff", "Show unstaged changes"),
            ("git diff --staged", "Show staged changes"),
            ("git blame <file>", "Show who changed each line"),
        ],
    },
    CommandGroup {
        title: "Undoing Changes",
        commands: &[
            ("git reset HEAD <file>", "Unstage file"),
            ("git reset --soft HEAD~1", "Undo last commit (keep changes)"),
            ("git reset --hard HEAD~1", "Undo last commit (discard changes)"),
            ("git restore <file>", "Restore file (modern)"),
            ("git revert <commit>", "Create commit that undoes changes"),
            ("git clean -fd", "Remove untracked files and directories"),
        ],
    },
    CommandGroup {
        title: "Stashing",
        commands: &[
            ("git stash", "Stash current changes"),
            ("git stash push -m 'message'", "Stash with message"),
            ("git stash list", "List all stashes"),
            ("git stash pop", "Apply and remove latest stash"),
            ("git stash apply", "Apply stash without removing"),
            ("git stash clear", "Delete all stashes"),
        ],
    },
    CommandGroup {
        title: "Advanced Operations",
        commands: &[
            ("git rebase <branch>", "Rebase current branch"),
            ("git rebase -i HEAD~3", "Interactive rebase last 3 commits"),
            ("git cherry-pick <commit>", "Apply specific commit"),
            ("git tag -a v1.0.0 -m 'message'", "Create annotated tag"),
            ("git push --tags", "Push all tags"),
            ("git submodule update --init", "Initialize submodules"),
        ],
    },
];
