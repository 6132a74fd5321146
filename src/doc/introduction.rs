/*!
# Introductory Tutorial

Start the interpreter from a terminal. Type BYE or CTRL-D to exit.
<pre><code>&nbsp;  cocoa BASIC
&nbsp;  Ready.
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C. `CONT` picks up where it stopped.

A statement typed without a line number runs right away. This is
called direct mode.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Put a line number in front of a statement and it is saved in the
program instead. Line numbers order the program; typing a line with
an existing number replaces that line.

<pre><code>&nbsp;> 10 print "Hello World"
&nbsp;> 20 goto 10
&nbsp;> LIST
&nbsp;  10 PRINT "Hello World"
&nbsp;  20 GOTO 10
&nbsp;  Ready.
</code></pre>

Lines are listed the way they were understood, not the way they were
typed. To edit a line, type its number and press TAB.

`RUN` starts the program. This one never ends, so press CTRL-C.

<pre><code>&nbsp;> RUN
&nbsp;  Hello World
&nbsp;  Hello World
&nbsp;  Stopped at 10
&nbsp;  Ready.
</code></pre>

Save your work with `SAVE "hello.bas"` and get it back with
`LOAD "hello.bas"`.

## Running from the command line

```text
basic hello.bas          load a program, then start the shell
basic --run hello.bas    run a program and exit
basic --plain < cmds.txt read commands without line editing
basic --seed 42          seed RND; BASIC_SEED works too
basic --trace            start with TRON
```

Set `RUST_LOG=debug` to log interpreter events to stderr.
*/
